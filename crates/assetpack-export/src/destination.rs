use crate::ExportError;
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::sync::{Arc, OnceLock};

const ARCHIVE_EXTENSION: &str = "zip";

/// Output directory shared by every target of one invocation.
///
/// The directory is created at most once; the first outcome (including a failure)
/// is what every target sees.
#[derive(Debug)]
pub struct ExportDestination {
    dir: Utf8PathBuf,
    ready: OnceLock<Result<(), Arc<io::Error>>>,
}

impl ExportDestination {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ready: OnceLock::new(),
        }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    pub fn ensure(&self) -> Result<&Utf8Path, ExportError> {
        let ready = self.ready.get_or_init(|| {
            tracing::debug!(dir = %self.dir, "creating output directory");
            std::fs::create_dir_all(&self.dir).map_err(Arc::new)
        });

        match ready {
            Ok(()) => Ok(&self.dir),
            Err(source) => Err(ExportError::Destination {
                path: self.dir.clone(),
                source: Arc::clone(source),
            }),
        }
    }

    /// `<dir>/<target name>.zip`, see [`archive_file_name`].
    pub fn archive_path(&self, target_name: &str) -> Utf8PathBuf {
        self.dir.join(archive_file_name(target_name))
    }
}

/// `<target name>.zip`, with path separators in the name replaced.
pub fn archive_file_name(target_name: &str) -> String {
    let file_stem: String = target_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();
    format!("{file_stem}.{ARCHIVE_EXTENSION}")
}
