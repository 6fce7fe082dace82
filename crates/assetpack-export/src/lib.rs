//! Archive export for validated targets.
//!
//! The exporter trusts the analyzer: it never re-checks policy. It only resolves,
//! deduplicates and copies files, and guarantees that a failed export leaves no
//! archive behind.

#![forbid(unsafe_code)]

mod destination;
mod error;
mod exporter;
mod outcome;
mod source;

#[cfg(test)]
mod test_support;

pub use destination::{ExportDestination, archive_file_name};
pub use error::ExportError;
pub use exporter::{ArchiveExporter, ArchiveOptions};
pub use outcome::ExportOutcome;
pub use source::{AssetSource, FileStamp, FsAssetSource};
