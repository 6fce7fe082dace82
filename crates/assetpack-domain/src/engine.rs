use crate::checks::{component_origin, library_whitelist, texture_stats};
use crate::policy::EffectiveConfig;
use crate::report::Report;
use assetpack_types::{DependencyNode, NodeKind};

/// Validate `deps` for `target`.
///
/// Nodes are visited once, in the order given. Every node is evaluated even after
/// earlier violations. Shaders and untyped nodes always pass.
pub fn analyze(
    target: &DependencyNode,
    deps: &[DependencyNode],
    cfg: &EffectiveConfig,
) -> Report {
    let mut report = Report::new(target);

    for node in deps {
        match &node.kind {
            NodeKind::Composite { root } => component_origin::run(node, root, cfg, &mut report),
            NodeKind::Texture { width, height } => {
                texture_stats::run(node, *width, *height, cfg, &mut report)
            }
            NodeKind::Library => library_whitelist::run(node, cfg, &mut report),
            NodeKind::Shader | NodeKind::Other => {}
        }
    }

    report
}
