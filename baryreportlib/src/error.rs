//! Error types for baryreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting or rendering result tables
#[derive(Error, Debug)]
pub enum BaryReportError {
    /// Table style outside twiki/latex/csv
    #[error("unknown style \"{0}\" for table")]
    UnsupportedStyle(String),

    /// Measurement kind outside barycentre/beamspot
    #[error("unknown measurement type \"{0}\"")]
    UnsupportedKind(String),

    /// Named folder absent from the data file
    #[error("folder \"{folder}\" not found in \"{file}\"")]
    FolderNotFound { folder: String, file: PathBuf },

    /// Named tree absent from a folder
    #[error("tree \"{tree}\" not found in folder \"{folder}\"")]
    TreeNotFound { tree: String, folder: String },

    /// Requested column has no matching branch in the tree
    #[error("branch \"{branch}\" not found in tree \"{tree}\"")]
    BranchNotFound { branch: String, tree: String },

    /// The `run` column is required in every table
    #[error("table has no \"run\" column")]
    MissingRunColumn,

    /// Column length differs from the `run` column
    #[error("column \"{column}\" has {found} entries, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Same column name given twice
    #[error("duplicate column \"{0}\"")]
    DuplicateColumn(String),

    /// A run identifier that is not an integer
    #[error("run value {0} is not an integer")]
    InvalidRunValue(f64),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or write a report file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data file is not a valid folder/tree export
    #[error("invalid data file '{path}': {message}")]
    InvalidData { path: PathBuf, message: String },

    /// Job configuration present but malformed
    #[error("invalid job configuration '{path}': {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
