//! Data source: folders and trees exported from the analyzer output.
//!
//! The analyzer output is opaque to this crate; it is consumed as a JSON
//! export of its folder/tree content:
//!
//! ```json
//! {
//!   "PixelBaryCentreAnalyzer": {
//!     "PixelBarycentre": {
//!       "run":    [315252, 315253],
//!       "BPIX.x": [0.101, 0.102]
//!     }
//!   }
//! }
//! ```
//!
//! The whole file is read into memory once; there is no streaming.
//!
//! ## Example
//!
//! ```rust,ignore
//! use baryreportlib::source::DataFile;
//!
//! let file = DataFile::open("PixelBaryCentre_2018.json")?;
//! let tree = file.folder("PixelBaryCentreAnalyzer")?.tree("PixelBarycentre")?;
//! let table = tree.to_table(&["run", "BPIX.x"])?;
//! ```

pub mod file;

pub use file::{DataFile, Folder, Tree};
