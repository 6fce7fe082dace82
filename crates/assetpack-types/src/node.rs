//! Dependency node model.
//!
//! Nodes are produced by the graph collaborator and borrowed by the analyzer and
//! exporter for the duration of one pass. Nothing downstream mutates them.

use crate::AssetPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a node within one dependency graph.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyNode {
    pub id: NodeId,
    pub name: String,
    /// Resolved project-relative path; `None` for runtime-only nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<AssetPath>,
    pub kind: NodeKind,
}

impl DependencyNode {
    /// File name used for library matching: the last path segment, or the
    /// display name when the node has no path.
    pub fn file_name(&self) -> &str {
        match &self.path {
            Some(p) if !p.is_empty() => p.file_name(),
            _ => &self.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Composite { root: CompositePart },
    Shader,
    Texture { width: u32, height: u32 },
    Library,
    Other,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Composite { .. } => "Composite",
            NodeKind::Shader => "Shader",
            NodeKind::Texture { .. } => "Texture",
            NodeKind::Library => "Library",
            NodeKind::Other => "Other",
        }
    }
}

/// One object in a composite's hierarchy. Inactive parts are still part of the graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompositePart {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub components: Vec<ComponentRef>,
    #[serde(default)]
    pub children: Vec<CompositePart>,
}

fn default_active() -> bool {
    true
}

impl CompositePart {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active: true,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Depth-first walk over this part and all descendants, active or not.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a CompositePart)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Precomputed capability tag for a component type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    BuiltIn,
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentRef {
    /// Fully qualified type name, e.g. `UnityEngine.MeshRenderer`.
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Broken reference (the component's script no longer resolves).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub missing: bool,
}

impl ComponentRef {
    /// Component whose namespace is everything before the last `.` of `type_name`.
    pub fn named(type_name: &str) -> Self {
        let namespace = type_name
            .rsplit_once('.')
            .map(|(ns, _)| ns.to_string());
        Self {
            type_name: type_name.to_string(),
            namespace,
            origin: None,
            missing: false,
        }
    }

    /// The declared namespace, else everything before the last `.` of `type_name`.
    pub fn effective_namespace(&self) -> Option<&str> {
        match &self.namespace {
            Some(ns) => Some(ns),
            None => self.type_name.rsplit_once('.').map(|(ns, _)| ns),
        }
    }
}
