use crate::{DependencyGraph, GraphError};
use assetpack_types::{AssetPath, DependencyNode, NodeId, NodeKind};
use serde::Deserialize;

/// On-disk graph file shape shared by the JSON and TOML readers.
#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    targets: Vec<String>,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    kind: Option<NodeKind>,
    #[serde(default)]
    deps: Vec<String>,
}

pub fn parse_graph_json(text: &str) -> Result<DependencyGraph, GraphError> {
    let file: GraphFile = serde_json::from_str(text)?;
    build(file)
}

pub fn parse_graph_toml(text: &str) -> Result<DependencyGraph, GraphError> {
    let file: GraphFile = toml::from_str(text)?;
    build(file)
}

fn build(file: GraphFile) -> Result<DependencyGraph, GraphError> {
    let nodes = file
        .nodes
        .into_iter()
        .map(|raw| {
            let path = raw
                .path
                .map(AssetPath::new)
                .filter(|p| !p.is_empty());
            if let Some(p) = path.as_ref().filter(|p| !p.stays_in_project()) {
                return Err(GraphError::PathOutsideProject {
                    node: raw.id,
                    path: p.as_str().to_string(),
                });
            }
            let kind = raw.kind.unwrap_or_else(|| infer_kind(path.as_ref()));
            let node = DependencyNode {
                name: raw.name.unwrap_or_else(|| raw.id.clone()),
                id: NodeId::new(raw.id),
                path,
                kind,
            };
            Ok((node, raw.deps))
        })
        .collect::<Result<Vec<_>, _>>()?;

    DependencyGraph::build(nodes, file.targets)
}

/// Untyped nodes are libraries when their file is a `.dll`, otherwise opaque.
fn infer_kind(path: Option<&AssetPath>) -> NodeKind {
    match path {
        Some(p) if p.has_extension("dll") => NodeKind::Library,
        _ => NodeKind::Other,
    }
}
