//! # baryreportlib
//!
//! Turns pixel barycentre and beam spot alignment results into text tables.
//!
//! ## Overview
//!
//! The pixel barycentre analyzer stores, per run, the position of each
//! tracker partition (and of the beam spot) in named trees. This library reads
//! those trees into an in-memory [`Table`] and renders it in one of three
//! styles:
//!
//! - **twiki**: `|  run   |  BPIX.x   | ... |` markup for wiki pages
//! - **latex**: a `tabular` environment ready to paste into a note
//! - **csv**: plain comma-separated values for further processing
//!
//! When driven by a [`JobConfig`], every configured style is written to its
//! own file under the output directory.
//!
//! ## Example
//!
//! ```rust
//! use baryreportlib::{render_to_string, Style, Table};
//!
//! let table = Table::new(vec![1, 2])
//!     .with_column("BPIX.x", vec![0.1, 0.2]).unwrap()
//!     .with_column("BPIX.y", vec![0.3, 0.4]).unwrap();
//!
//! let csv = render_to_string(&table, Style::Csv);
//! assert_eq!(csv.lines().next(), Some("run, BPIX.x, BPIX.y"));
//! assert_eq!(csv.lines().nth(1), Some("1, 0.100000, 0.300000"));
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod output;
pub mod render;
pub mod selection;
pub mod source;
pub mod style;
pub mod table;

pub use config::JobConfig;
pub use error::BaryReportError;
pub use listing::{list_branches, list_content, TreeSummary};
pub use output::{resolve_output_targets, write_reports, OutputTarget};
pub use render::{render, render_named, render_to_string};
pub use selection::{Kind, Selection};
pub use source::{DataFile, Folder, Tree};
pub use style::Style;
pub use table::{Column, ColumnData, Table};

/// Result type for baryreportlib operations
pub type Result<T> = std::result::Result<T, BaryReportError>;

/// Look up the tree described by `selection` in `file`.
pub fn find_tree<'a>(file: &'a DataFile, selection: &Selection) -> Result<&'a Tree> {
    let folder = file.folder(selection.folder_name())?;
    tracing::debug!(folder = folder.name(), "opened folder");

    let tree = folder.tree(&selection.tree_name())?;
    tracing::info!(tree = tree.name(), "reading tree");
    Ok(tree)
}

/// Read the table described by `selection` from `file`.
pub fn extract_table(file: &DataFile, selection: &Selection) -> Result<Table> {
    find_tree(file, selection)?.to_table(&selection.columns())
}
