//! Output target resolution and report writing.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::BaryReportError;
use crate::render::render;
use crate::selection::{report_basename, Kind};
use crate::style::Style;
use crate::table::Table;
use crate::Result;

/// A report file and the style it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputTarget {
    /// Rendering style
    pub style: Style,
    /// Full path of the report
    pub path: PathBuf,
}

/// One target per requested style, in request order.
pub fn resolve_output_targets(
    kind: Kind,
    partition: &str,
    quality: bool,
    styles: &[Style],
    output_dir: impl AsRef<Path>,
) -> Vec<OutputTarget> {
    let base = report_basename(kind, partition, quality);
    styles
        .iter()
        .map(|&style| OutputTarget {
            style,
            path: output_dir
                .as_ref()
                .join(format!("{}.{}", base, style.extension())),
        })
        .collect()
}

/// Write `table` to every target, in order.
///
/// Files are written one at a time and closed before the next is opened.
/// The first failure is returned; reports already written are left in place.
pub fn write_reports(table: &Table, targets: &[OutputTarget]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        tracing::info!(path = %target.path.display(), style = %target.style, "writing report");
        write_report(table, target)?;
        written.push(target.path.clone());
    }
    Ok(written)
}

fn write_report(table: &Table, target: &OutputTarget) -> Result<()> {
    let to_write_error = |source: std::io::Error| BaryReportError::FileWrite {
        path: target.path.clone(),
        source,
    };

    let file = File::create(&target.path).map_err(to_write_error)?;
    render(table, target.style, BufWriter::new(file)).map_err(|e| match e {
        BaryReportError::Io(source) => to_write_error(source),
        other => other,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_table() -> Table {
        Table::new(vec![1, 2])
            .with_column("BPIX.x", vec![0.1, 0.2])
            .unwrap()
    }

    #[test]
    fn test_resolve_targets_in_request_order() {
        let targets = resolve_output_targets(
            Kind::Barycentre,
            "BPIX",
            false,
            &[Style::Twiki, Style::Latex, Style::Csv],
            "/out",
        );
        let paths: Vec<PathBuf> = targets.iter().map(|t| t.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/out/barycentre_BPIX.txt"),
                PathBuf::from("/out/barycentre_BPIX.tex"),
                PathBuf::from("/out/barycentre_BPIX.csv"),
            ]
        );
        assert_eq!(targets[1].style, Style::Latex);
    }

    #[test]
    fn test_resolve_targets_quality_suffix() {
        let targets =
            resolve_output_targets(Kind::Beamspot, "FPIX", true, &[Style::Csv, Style::Twiki], "r");
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path, Path::new("r").join("beamspot_FPIX_quality.csv"));
        assert_eq!(targets[1].path, Path::new("r").join("beamspot_FPIX_quality.txt"));
    }

    #[test]
    fn test_write_reports() {
        let dir = tempdir().unwrap();
        let targets = resolve_output_targets(
            Kind::Barycentre,
            "BPIX",
            false,
            &[Style::Csv, Style::Latex],
            dir.path(),
        );
        let written = write_reports(&sample_table(), &targets).unwrap();
        assert_eq!(written.len(), 2);

        let csv = fs::read_to_string(dir.path().join("barycentre_BPIX.csv")).unwrap();
        assert_eq!(csv, "run, BPIX.x\n1, 0.100000\n2, 0.200000\n");
        let tex = fs::read_to_string(dir.path().join("barycentre_BPIX.tex")).unwrap();
        assert!(tex.starts_with("\\begin{tabular}{cc}\n"));
        assert!(tex.ends_with("\\end{tabular}\n"));
    }

    #[test]
    fn test_write_failure_keeps_earlier_reports() {
        let dir = tempdir().unwrap();
        let good = OutputTarget {
            style: Style::Csv,
            path: dir.path().join("first.csv"),
        };
        let bad = OutputTarget {
            style: Style::Twiki,
            path: dir.path().join("missing").join("second.txt"),
        };
        let err = write_reports(&sample_table(), &[good.clone(), bad]).unwrap_err();
        assert!(matches!(err, BaryReportError::FileWrite { .. }));
        assert!(good.path.exists());
    }
}
