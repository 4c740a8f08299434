//! Report files: naming and writing.
//!
//! When driven by a job configuration, one report is written per requested
//! style:
//!
//! ```text
//! {output_dir}/{kind}_{partition}[_quality].{txt|tex|csv}
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use baryreportlib::output::{resolve_output_targets, write_reports};
//!
//! let targets = resolve_output_targets(Kind::Barycentre, "BPIX", false, &styles, "/out");
//! write_reports(&table, &targets)?;
//! ```

pub mod targets;

pub use targets::{resolve_output_targets, write_reports, OutputTarget};
