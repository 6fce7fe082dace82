use crate::{AssetSource, FileStamp};
use assetpack_types::{AssetPath, CompositePart, DependencyNode, NodeId, NodeKind};
use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

/// In-memory project files; optionally fails the n-th `open`.
#[derive(Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
    fail_open_at: Option<usize>,
    opens: AtomicUsize,
}

impl MemorySource {
    pub fn with_asset(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self.files
            .insert(format!("{path}.meta"), format!("guid: {path}").into_bytes());
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    pub fn failing_open_at(mut self, n: usize) -> Self {
        self.fail_open_at = Some(n);
        self
    }
}

impl AssetSource for MemorySource {
    fn stat(&self, path: &str) -> io::Result<Option<FileStamp>> {
        Ok(self.files.get(path).map(|data| FileStamp {
            len: data.len() as u64,
            modified: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
        }))
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let n = self.opens.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_open_at == Some(n) {
            return Err(io::Error::other("injected read failure"));
        }
        let data = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        Ok(Box::new(Cursor::new(data.as_slice())))
    }
}

pub fn node(id: &str, path: &str, kind: NodeKind) -> DependencyNode {
    let path = AssetPath::new(path);
    DependencyNode {
        id: NodeId::new(id),
        name: path.file_name().to_string(),
        path: Some(path),
        kind,
    }
}

pub fn target(name: &str, path: &str) -> DependencyNode {
    DependencyNode {
        id: NodeId::new(name.to_lowercase()),
        name: name.to_string(),
        path: Some(AssetPath::new(path)),
        kind: NodeKind::Composite {
            root: CompositePart::new(name),
        },
    }
}
