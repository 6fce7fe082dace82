use crate::GraphError;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

const GRAPH_SUFFIXES: &[&str] = &[".deps.json", ".deps.toml"];

/// Discover graph files (`*.deps.json`, `*.deps.toml`) below `root`, sorted by path.
pub fn discover_graphs(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, GraphError> {
    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| GraphError::Walk {
            path: root.to_owned(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|_| GraphError::NonUtf8Path(root.to_owned()))?;
        let name = path.file_name().unwrap_or_default();
        if GRAPH_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}
