use crate::policy::EffectiveConfig;
use assetpack_types::{AssetPath, ComponentRef, CompositePart, DependencyNode, NodeId, NodeKind};

pub fn config() -> EffectiveConfig {
    EffectiveConfig::with_defaults("test")
}

pub fn composite(
    id: &str,
    name: &str,
    path: &str,
    components: Vec<ComponentRef>,
) -> DependencyNode {
    let mut root = CompositePart::new(name);
    root.components = components;
    DependencyNode {
        id: NodeId::new(id),
        name: name.to_string(),
        path: Some(AssetPath::new(path)),
        kind: NodeKind::Composite { root },
    }
}

pub fn library(id: &str, path: &str) -> DependencyNode {
    let path = AssetPath::new(path);
    DependencyNode {
        id: NodeId::new(id),
        name: path.file_name().to_string(),
        path: Some(path),
        kind: NodeKind::Library,
    }
}

pub fn texture(id: &str, width: u32, height: u32) -> DependencyNode {
    DependencyNode {
        id: NodeId::new(id),
        name: id.to_string(),
        path: Some(AssetPath::new(format!("Assets/Textures/{id}.png"))),
        kind: NodeKind::Texture { width, height },
    }
}

pub fn component(type_name: &str) -> ComponentRef {
    ComponentRef::named(type_name)
}
