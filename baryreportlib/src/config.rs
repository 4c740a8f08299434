//! Job configuration handed over by the validation framework.
//!
//! When the tool runs inside the validation framework, its positional
//! argument is a JSON job configuration instead of a data file:
//!
//! ```json
//! {
//!   "input":  "/data/PixelBaryCentre_2018.json",
//!   "output": "/results/barycentre",
//!   "styles": ["twiki", "latex", "csv"]
//! }
//! ```
//!
//! Other keys written by the framework are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BaryReportError;
use crate::style::Style;
use crate::Result;

/// Parsed job configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Data file to read
    pub input: PathBuf,
    /// Directory receiving the reports
    pub output: PathBuf,
    /// Styles to write, one file each
    pub styles: Vec<String>,
}

impl JobConfig {
    /// Decide whether `path` is a job configuration.
    ///
    /// Returns `Ok(None)` for anything that is not a JSON object with an
    /// `input` key: binary files, plain text, and data exports alike.
    pub fn detect(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| BaryReportError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::detect_bytes(&bytes, path)
    }

    fn detect_bytes(bytes: &[u8], path: &Path) -> Result<Option<Self>> {
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(_) => return Ok(None),
        };
        if value.get("input").is_none() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| BaryReportError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Configured styles, validated.
    ///
    /// Fails on the first unsupported name, before any report is written.
    pub fn styles(&self) -> Result<Vec<Style>> {
        self.styles.iter().map(|s| s.parse::<Style>()).collect()
    }
}
