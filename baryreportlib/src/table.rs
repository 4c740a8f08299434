//! In-memory result table.
//!
//! A `Table` is built once from the data source and is immutable afterwards.
//! It always carries the integer `run` column, followed by the measurement
//! columns in the order they were added:
//!
//! ```text
//! run | BPIX.x | BPIX.y | BPIX.z
//! ```
//!
//! Every column has exactly one value per run; constructors reject anything
//! else instead of truncating.

use serde::{Deserialize, Serialize};

use crate::error::BaryReportError;
use crate::Result;

/// Name of the mandatory run identifier column.
pub const RUN_COLUMN: &str = "run";

/// Raw values of one column, as stored in the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnData {
    /// Integer values (run numbers, counters)
    Ints(Vec<i64>),
    /// Floating-point values
    Floats(Vec<f64>),
}

impl ColumnData {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Ints(v) => v.len(),
            ColumnData::Floats(v) => v.len(),
        }
    }

    /// Whether the column has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values widened to f64.
    pub fn to_floats(&self) -> Vec<f64> {
        match self {
            ColumnData::Ints(v) => v.iter().map(|&x| x as f64).collect(),
            ColumnData::Floats(v) => v.clone(),
        }
    }

    /// Values as run identifiers. Floating values must be integral and fit
    /// in an i64.
    pub fn to_runs(&self) -> Result<Vec<i64>> {
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        const UPPER: f64 = i64::MAX as f64;
        const LOWER: f64 = i64::MIN as f64;

        match self {
            ColumnData::Ints(v) => Ok(v.clone()),
            ColumnData::Floats(v) => v
                .iter()
                .map(|&x| {
                    if x.is_finite() && x.fract() == 0.0 && (LOWER..UPPER).contains(&x) {
                        Ok(x as i64)
                    } else {
                        Err(BaryReportError::InvalidRunValue(x))
                    }
                })
                .collect(),
        }
    }
}

/// A named measurement column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, e.g. `BPIX.x`
    pub name: String,
    /// One value per run
    pub values: Vec<f64>,
}

/// Result table: run identifiers plus measurement columns.
///
/// Deserialization goes through the same checks as [`Table::with_column`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    runs: Vec<i64>,
    columns: Vec<Column>,
}

/// Unchecked wire form of [`Table`].
#[derive(Deserialize)]
struct RawTable {
    runs: Vec<i64>,
    columns: Vec<Column>,
}

impl TryFrom<RawTable> for Table {
    type Error = BaryReportError;

    fn try_from(raw: RawTable) -> Result<Self> {
        raw.columns
            .into_iter()
            .try_fold(Table::new(raw.runs), |table, column| {
                table.with_column(column.name, column.values)
            })
    }
}

impl Table {
    /// Create a table holding only the run column.
    pub fn new(runs: Vec<i64>) -> Self {
        Self {
            runs,
            columns: Vec::new(),
        }
    }

    /// Builder: append a measurement column.
    ///
    /// Fails if the name is already taken or the length differs from the
    /// run column.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if name == RUN_COLUMN || self.columns.iter().any(|c| c.name == name) {
            return Err(BaryReportError::DuplicateColumn(name));
        }
        if values.len() != self.runs.len() {
            return Err(BaryReportError::ColumnLengthMismatch {
                column: name,
                expected: self.runs.len(),
                found: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Build a table from named raw columns.
    ///
    /// The `run` column may appear anywhere in the input; it is moved to the
    /// front and the remaining columns keep their relative order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnData)>,
        S: Into<String>,
    {
        let mut runs = None;
        let mut measurements = Vec::new();

        for (name, data) in columns {
            let name = name.into();
            if name == RUN_COLUMN {
                if runs.is_some() {
                    return Err(BaryReportError::DuplicateColumn(name));
                }
                runs = Some(data.to_runs()?);
            } else {
                measurements.push((name, data.to_floats()));
            }
        }

        let runs = runs.ok_or(BaryReportError::MissingRunColumn)?;
        measurements
            .into_iter()
            .try_fold(Table::new(runs), |table, (name, values)| {
                table.with_column(name, values)
            })
    }

    /// Run identifiers in row order
    pub fn runs(&self) -> &[i64] {
        &self.runs
    }

    /// Measurement columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All column names, `run` first.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(RUN_COLUMN)
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Number of columns including `run`
    pub fn column_count(&self) -> usize {
        self.columns.len() + 1
    }

    /// Number of rows (length of the run column)
    pub fn row_count(&self) -> usize {
        self.runs.len()
    }

    /// Iterate rows as `(run, measurements)`, pulling the same index from
    /// every column.
    pub fn rows(&self) -> impl Iterator<Item = (i64, Vec<f64>)> + '_ {
        self.runs.iter().enumerate().map(move |(i, &run)| {
            let values = self.columns.iter().map(|c| c.values[i]).collect();
            (run, values)
        })
    }
}
