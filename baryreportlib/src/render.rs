//! Rendering of result tables as text.
//!
//! Output is written line by line in this order:
//!
//! 1. prologue (latex only)
//! 2. header built from the column names
//! 3. one line per run, in table row order
//! 4. epilogue (latex only)
//!
//! Field formats per style:
//!
//! | style | header fields        | run      | measurements |
//! |-------|----------------------|----------|--------------|
//! | twiki | centred, width 6 / 9 | width 6  | `{:9.6}`     |
//! | latex | centred, width 6 / 9 | width 6  | `{:9.6}`     |
//! | csv   | raw names            | plain    | `{:.6}`      |
//!
//! Non-finite measurements are written `nan`, `inf` and `-inf`.

use std::io::Write;

use crate::style::Style;
use crate::table::Table;
use crate::Result;

/// Render `table` in `style` to `out`, returning the sink so writes can be
/// chained. The sink is flushed but otherwise left to the caller.
pub fn render<W: Write>(table: &Table, style: Style, mut out: W) -> Result<W> {
    let layout = style.layout(table.column_count());

    if let Some(prologue) = &layout.prologue {
        writeln!(out, "{}", prologue)?;
    }
    writeln!(out, "{}", layout.header_line(&table.column_names()))?;
    if let Some(rule) = layout.header_rule {
        writeln!(out, "{}", rule)?;
    }
    for (run, values) in table.rows() {
        writeln!(out, "{}", layout.row_line(run, &values))?;
    }
    if let Some(epilogue) = layout.epilogue {
        writeln!(out, "{}", epilogue)?;
    }
    out.flush()?;
    Ok(out)
}

/// Render with a style given by name.
///
/// The name is validated before anything is written, so an unsupported
/// style leaves `out` untouched.
pub fn render_named<W: Write>(table: &Table, style: &str, out: W) -> Result<W> {
    let style: Style = style.parse()?;
    render(table, style, out)
}

/// Render into a `String`.
pub fn render_to_string(table: &Table, style: Style) -> String {
    let buf = render(table, style, Vec::new()).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BaryReportError;

    fn sample_table() -> Table {
        Table::new(vec![1, 2])
            .with_column("BPIX.x", vec![0.1, 0.2])
            .unwrap()
            .with_column("BPIX.y", vec![0.3, 0.4])
            .unwrap()
    }

    #[test]
    fn test_csv_output() {
        let out = render_to_string(&sample_table(), Style::Csv);
        assert_eq!(
            out,
            "run, BPIX.x, BPIX.y\n1, 0.100000, 0.300000\n2, 0.200000, 0.400000\n"
        );
    }

    #[test]
    fn test_twiki_output() {
        let out = render_to_string(&sample_table(), Style::Twiki);
        let expected = [
            "|  run   |  BPIX.x   |  BPIX.y   |",
            "|      1 |  0.100000 |  0.300000 |",
            "|      2 |  0.200000 |  0.400000 |",
        ];
        assert_eq!(out, expected.join("\n") + "\n");
    }

    #[test]
    fn test_latex_output() {
        let out = render_to_string(&sample_table(), Style::Latex);
        let expected = [
            r"\begin{tabular}{ccc}",
            r" run   &  BPIX.x   &  BPIX.y   \\",
            r"\hline",
            r"     1 &  0.100000 &  0.300000 \\",
            r"     2 &  0.200000 &  0.400000 \\",
            r"\end{tabular}",
        ];
        assert_eq!(out, expected.join("\n") + "\n");
    }

    #[test]
    fn test_header_field_count_matches_columns() {
        let table = sample_table();
        let twiki = render_to_string(&table, Style::Twiki);
        let header = twiki.lines().next().unwrap();
        assert_eq!(header.trim_matches('|').split(" | ").count(), 3);

        let latex = render_to_string(&table, Style::Latex);
        let header = latex.lines().nth(1).unwrap();
        assert_eq!(header.trim_end_matches(r" \\").split(" & ").count(), 3);

        let csv = render_to_string(&table, Style::Csv);
        assert_eq!(csv.lines().next().unwrap().split(", ").count(), 3);
    }

    #[test]
    fn test_row_count_matches_runs() {
        let table = Table::new(vec![10, 11, 12, 13])
            .with_column("BS.z", vec![1.0, 2.0, 3.0, 4.0])
            .unwrap();
        assert_eq!(render_to_string(&table, Style::Csv).lines().count(), 5);
        assert_eq!(render_to_string(&table, Style::Twiki).lines().count(), 5);
        // prologue, header, \hline, rows, epilogue
        assert_eq!(render_to_string(&table, Style::Latex).lines().count(), 8);
    }

    #[test]
    fn test_csv_round_trip() {
        let table = Table::new(vec![315252, 315253, 316000])
            .with_column("FPIX.x", vec![-0.123456, 1.5, 0.0])
            .unwrap()
            .with_column("FPIX.y", vec![12.25, -3.000001, 7.75])
            .unwrap();
        let out = render_to_string(&table, Style::Csv);

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(out.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        assert_eq!(headers, vec!["run", "FPIX.x", "FPIX.y"]);

        for (record, (run, values)) in reader.records().zip(table.rows()) {
            let record = record.unwrap();
            assert_eq!(record[0].parse::<i64>().unwrap(), run);
            for (field, expected) in record.iter().skip(1).zip(values) {
                let parsed: f64 = field.parse().unwrap();
                assert!((parsed - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_render_returns_sink() {
        let buf = render(&sample_table(), Style::Csv, Vec::new()).unwrap();
        let buf = render(&sample_table(), Style::Csv, buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 6);
    }

    #[test]
    fn test_unsupported_style_writes_nothing() {
        let mut buf = Vec::new();
        let err = render_named(&sample_table(), "xml", &mut buf).unwrap_err();
        assert!(matches!(err, BaryReportError::UnsupportedStyle(s) if s == "xml"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_run_only_table() {
        let table = Table::new(vec![7]);
        assert_eq!(render_to_string(&table, Style::Csv), "run\n7\n");
        assert_eq!(
            render_to_string(&table, Style::Twiki),
            "|  run   |\n|      7 |\n"
        );
    }

    #[test]
    fn test_non_finite_values_in_table() {
        let table = Table::new(vec![1, 2])
            .with_column("BS.x", vec![f64::NAN, f64::INFINITY])
            .unwrap();
        assert_eq!(
            render_to_string(&table, Style::Csv),
            "run, BS.x\n1, nan\n2, inf\n"
        );
        let latex = render_to_string(&table, Style::Latex);
        assert_eq!(latex.lines().nth(3), Some(r"     1 &       nan \\"));
    }

    #[test]
    fn test_negative_values_keep_width() {
        let table = Table::new(vec![1])
            .with_column("BS.x", vec![-0.25])
            .unwrap();
        let out = render_to_string(&table, Style::Twiki);
        assert_eq!(out.lines().nth(1).unwrap(), "|      1 | -0.250000 |");
    }
}
