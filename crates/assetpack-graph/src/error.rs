use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or resolving a dependency graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk {path}: {source}")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("non-UTF-8 path below {0}")]
    NonUtf8Path(Utf8PathBuf),

    #[error("unsupported graph file format: {0} (expected .json or .toml)")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("parse graph json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse graph toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("node '{node}' has path {path} outside the project root")]
    PathOutsideProject { node: String, path: String },

    #[error("node id must not be empty")]
    EmptyId,

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("node '{node}' depends on unknown node '{dependency}'")]
    UnknownDependency { node: String, dependency: String },

    #[error("unknown target: {0}")]
    UnknownTarget(String),
}
