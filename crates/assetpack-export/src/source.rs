use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::{self, Read};
use std::time::SystemTime;

/// Filesystem attributes stamped onto archive entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileStamp {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Read access to project files, addressed by project-relative path.
pub trait AssetSource: Sync {
    /// `Ok(None)` when no file exists at `path`.
    fn stat(&self, path: &str) -> io::Result<Option<FileStamp>>;

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// Reads assets from a project directory on disk.
#[derive(Clone, Debug)]
pub struct FsAssetSource {
    root: Utf8PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl AssetSource for FsAssetSource {
    fn stat(&self, path: &str) -> io::Result<Option<FileStamp>> {
        match fs::metadata(self.root.join(path)) {
            Ok(meta) if meta.is_file() => Ok(Some(FileStamp {
                len: meta.len(),
                modified: meta.modified().ok(),
            })),
            Ok(_) => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(fs::File::open(self.root.join(path))?))
    }
}
