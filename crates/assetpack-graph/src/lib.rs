//! Graph adapters: discover and read dependency graph files, and expand each
//! root target into its flat, ordered dependency list.
//!
//! This crate is allowed to do filesystem IO. The analyzer and exporter only ever
//! see the flattened node lists it produces.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod model;
mod parse;

pub use discover::discover_graphs;
pub use error::GraphError;
pub use model::{DependencyGraph, ResolvedTarget};
pub use parse::{parse_graph_json, parse_graph_toml};

use camino::Utf8Path;

/// Read a graph file, choosing the format from its extension (`.json` or `.toml`).
pub fn load_graph(path: &Utf8Path) -> Result<DependencyGraph, GraphError> {
    let text = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_owned(),
        source,
    })?;

    let graph = match path.extension() {
        Some("json") => parse_graph_json(&text)?,
        Some("toml") => parse_graph_toml(&text)?,
        _ => return Err(GraphError::UnsupportedFormat(path.to_owned())),
    };

    tracing::debug!(
        path = %path,
        nodes = graph.len(),
        targets = graph.target_ids().len(),
        "loaded dependency graph"
    );
    Ok(graph)
}

/// Load one graph file, or every graph file below a directory, and resolve all targets.
///
/// Targets keep file order, then declaration order within each file.
pub fn load_targets(path: &Utf8Path) -> Result<Vec<ResolvedTarget>, GraphError> {
    let files = if path.is_dir() {
        discover_graphs(path)?
    } else {
        vec![path.to_owned()]
    };

    let mut out = Vec::new();
    for file in files {
        let graph = load_graph(&file)?;
        out.extend(graph.resolve_targets()?);
    }
    Ok(out)
}
