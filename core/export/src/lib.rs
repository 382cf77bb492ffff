//! FILENAME: core/export/src/lib.rs
//! Export and display formatting for the sales dashboard.
//!
//! Two concerns live here, both pure formatting:
//! - `csv`: the downloadable delimited-text rendition of the active subset
//! - `format`: the currency/percent labels widgets display
//!
//! Triggering the actual file download is the UI's job, not ours.

pub mod csv;
pub mod error;
pub mod format;

pub use csv::{suggested_filename, to_csv, write_csv, CSV_HEADER};
pub use error::ExportError;
pub use format::{format_currency, format_percent};
