//! What to extract from the data file.
//!
//! The analyzer writes one folder per quality setting and, inside it, one
//! tree per measurement kind:
//!
//! ```text
//! PixelBaryCentreAnalyzer[WithPixelQuality]/
//!     PixelBarycentre[_<label>]    run, BPIX.x, BPIX.y, ..., FPIX.z, ...
//!     BeamSpot[_<label>]           run, BS.x, BS.y, BS.z
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BaryReportError;
use crate::table::RUN_COLUMN;

/// Folder holding results without the pixel quality requirement
pub const FOLDER: &str = "PixelBaryCentreAnalyzer";
/// Folder holding results with the pixel quality requirement
pub const QUALITY_FOLDER: &str = "PixelBaryCentreAnalyzerWithPixelQuality";

/// Measurement kind, selecting which tree is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Pixel partition barycentre positions
    #[default]
    Barycentre,
    /// Beam spot position
    Beamspot,
}

impl Kind {
    /// Name used on the command line and in report file names
    pub fn name(self) -> &'static str {
        match self {
            Kind::Barycentre => "barycentre",
            Kind::Beamspot => "beamspot",
        }
    }

    /// Tree name before any label suffix
    pub fn tree_name(self) -> &'static str {
        match self {
            Kind::Barycentre => "PixelBarycentre",
            Kind::Beamspot => "BeamSpot",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = BaryReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "barycentre" => Ok(Kind::Barycentre),
            "beamspot" => Ok(Kind::Beamspot),
            _ => Err(BaryReportError::UnsupportedKind(s.to_string())),
        }
    }
}

/// Selection of folder, tree and columns for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Measurement kind
    pub kind: Kind,
    /// Tracker partition, e.g. `BPIX`, `FPIX`, `BPIXLYR1`
    pub partition: String,
    /// Optional suffix appended to the tree name
    pub label: Option<String>,
    /// Read the results obtained with the pixel quality flag
    pub quality: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            partition: "BPIX".to_string(),
            label: None,
            quality: false,
        }
    }
}

impl Selection {
    /// Default selection (barycentre, BPIX)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the measurement kind
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: set the partition
    pub fn partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = partition.into();
        self
    }

    /// Builder: set the tree label
    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Builder: set the quality flag
    pub fn quality(mut self, quality: bool) -> Self {
        self.quality = quality;
        self
    }

    /// Folder to open in the data file
    pub fn folder_name(&self) -> &'static str {
        if self.quality {
            QUALITY_FOLDER
        } else {
            FOLDER
        }
    }

    /// Tree to read inside the folder
    pub fn tree_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{}_{}", self.kind.tree_name(), label),
            None => self.kind.tree_name().to_string(),
        }
    }

    /// Columns to extract: `run` then the x/y/z coordinates.
    ///
    /// The beam spot tree has no partitions; its columns are always `BS.*`.
    pub fn columns(&self) -> Vec<String> {
        let prefix = match self.kind {
            Kind::Barycentre => self.partition.as_str(),
            Kind::Beamspot => "BS",
        };
        std::iter::once(RUN_COLUMN.to_string())
            .chain(["x", "y", "z"].iter().map(|c| format!("{}.{}", prefix, c)))
            .collect()
    }

    /// Report file name without directory or extension
    pub fn report_basename(&self) -> String {
        report_basename(self.kind, &self.partition, self.quality)
    }
}

/// `{kind}_{partition}[_quality]`
pub fn report_basename(kind: Kind, partition: &str, quality: bool) -> String {
    let mut parts = vec![kind.name(), partition];
    if quality {
        parts.push("quality");
    }
    parts.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let sel = Selection::new();
        assert_eq!(sel.folder_name(), "PixelBaryCentreAnalyzer");
        assert_eq!(sel.tree_name(), "PixelBarycentre");
        assert_eq!(sel.columns(), vec!["run", "BPIX.x", "BPIX.y", "BPIX.z"]);
        assert_eq!(sel.report_basename(), "barycentre_BPIX");
    }

    #[test]
    fn test_quality_and_label() {
        let sel = Selection::new()
            .partition("FPIX")
            .label(Some("v2".to_string()))
            .quality(true);
        assert_eq!(sel.folder_name(), "PixelBaryCentreAnalyzerWithPixelQuality");
        assert_eq!(sel.tree_name(), "PixelBarycentre_v2");
        assert_eq!(sel.report_basename(), "barycentre_FPIX_quality");
    }

    #[test]
    fn test_beamspot_ignores_partition_in_columns() {
        let sel = Selection::new().kind(Kind::Beamspot).partition("FPIX");
        assert_eq!(sel.tree_name(), "BeamSpot");
        assert_eq!(sel.columns(), vec!["run", "BS.x", "BS.y", "BS.z"]);
        assert_eq!(sel.report_basename(), "beamspot_FPIX");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("BeamSpot".parse::<Kind>().unwrap(), Kind::Beamspot);
        assert_eq!("barycentre".parse::<Kind>().unwrap(), Kind::Barycentre);
        assert!(matches!(
            "vertex".parse::<Kind>(),
            Err(BaryReportError::UnsupportedKind(_))
        ));
    }
}
