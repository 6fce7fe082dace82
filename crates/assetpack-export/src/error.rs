use assetpack_types::ids;
use camino::Utf8PathBuf;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Failures that abort one target's export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("create output directory {path}: {source}")]
    Destination {
        path: Utf8PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("{path} does not exist or is not supported.")]
    MetadataMissing { path: String },

    #[error("{path} is outside the project root")]
    PathOutsideProject { path: String },

    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("copy {path} into archive: {source}")]
    Copy {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("write archive entry {entry}: {source}")]
    Archive {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("create archive in {dir}: {source}")]
    Create {
        dir: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("finalize archive {path}: {source}")]
    Persist {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Stable code recorded on the report entry for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::Destination { .. } => ids::CODE_DESTINATION_UNAVAILABLE,
            ExportError::MetadataMissing { .. } => ids::CODE_METADATA_MISSING,
            ExportError::PathOutsideProject { .. } => ids::CODE_PATH_OUTSIDE_PROJECT,
            ExportError::Read { .. }
            | ExportError::Copy { .. }
            | ExportError::Archive { .. }
            | ExportError::Create { .. }
            | ExportError::Persist { .. } => ids::CODE_ARCHIVE_WRITE_FAILED,
        }
    }
}
