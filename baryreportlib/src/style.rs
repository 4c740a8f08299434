//! Table output styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BaryReportError;

/// Text style used when rendering a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// TWiki table markup: `| a | b |`
    #[default]
    Twiki,
    /// LaTeX `tabular` environment
    Latex,
    /// Comma-separated values
    Csv,
}

impl Style {
    /// Every supported style, in declaration order.
    pub const ALL: [Style; 3] = [Style::Twiki, Style::Latex, Style::Csv];

    /// Style name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Style::Twiki => "twiki",
            Style::Latex => "latex",
            Style::Csv => "csv",
        }
    }

    /// File extension for reports written in this style
    pub fn extension(self) -> &'static str {
        match self {
            Style::Twiki => "txt",
            Style::Latex => "tex",
            Style::Csv => "csv",
        }
    }

    /// Formatting template for a table with `column_count` columns.
    pub fn layout(self, column_count: usize) -> Layout {
        match self {
            Style::Twiki => Layout {
                prologue: None,
                epilogue: None,
                open: "| ",
                separator: " | ",
                close: " |",
                header_rule: None,
                padded: true,
            },
            Style::Latex => Layout {
                prologue: Some(format!("\\begin{{tabular}}{{{}}}", "c".repeat(column_count))),
                epilogue: Some("\\end{tabular}"),
                open: "",
                separator: " & ",
                close: " \\\\",
                header_rule: Some("\\hline"),
                padded: true,
            },
            Style::Csv => Layout {
                prologue: None,
                epilogue: None,
                open: "",
                separator: ", ",
                close: "",
                header_rule: None,
                padded: false,
            },
        }
    }
}

/// Line template of one style.
///
/// Padded layouts centre header names (width 6 for `run`, 9 for the rest),
/// right-align runs to width 6 and measurements to `{:9.6}`. Unpadded
/// layouts write raw names, plain runs and `{:.6}` measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Line written before the header
    pub prologue: Option<String>,
    /// Line written after the last row
    pub epilogue: Option<&'static str>,
    /// Text opening every header and row line
    pub open: &'static str,
    /// Field separator
    pub separator: &'static str,
    /// Text closing every header and row line
    pub close: &'static str,
    /// Line written right after the header
    pub header_rule: Option<&'static str>,
    /// Whether fields are padded to fixed widths
    pub padded: bool,
}

impl Layout {
    /// Header line from the column names, `run` first.
    pub fn header_line(&self, names: &[&str]) -> String {
        let fields: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| match (self.padded, i) {
                (false, _) => name.to_string(),
                (true, 0) => format!("{:^6}", name),
                (true, _) => format!("{:^9}", name),
            })
            .collect();
        self.wrap(&fields)
    }

    /// Row line for one run.
    pub fn row_line(&self, run: i64, values: &[f64]) -> String {
        let run = if self.padded {
            format!("{:6}", run)
        } else {
            run.to_string()
        };
        let fields: Vec<String> = std::iter::once(run)
            .chain(values.iter().map(|&v| self.measurement(v)))
            .collect();
        self.wrap(&fields)
    }

    fn wrap(&self, fields: &[String]) -> String {
        format!("{}{}{}", self.open, fields.join(self.separator), self.close)
    }

    fn measurement(&self, value: f64) -> String {
        // Lower case nan/inf, not Rust's NaN.
        let text = if value.is_nan() {
            "nan".to_string()
        } else if value == f64::INFINITY {
            "inf".to_string()
        } else if value == f64::NEG_INFINITY {
            "-inf".to_string()
        } else {
            format!("{:.6}", value)
        };
        if self.padded {
            format!("{:>9}", text)
        } else {
            text
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = BaryReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twiki" => Ok(Style::Twiki),
            "latex" => Ok(Style::Latex),
            "csv" => Ok(Style::Csv),
            _ => Err(BaryReportError::UnsupportedStyle(s.to_string())),
        }
    }
}
