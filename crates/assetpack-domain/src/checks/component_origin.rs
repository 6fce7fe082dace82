use crate::checks::Decision;
use crate::policy::{CheckPolicy, EffectiveConfig};
use crate::report::{Report, ReportEntry};
use assetpack_types::{ComponentRef, CompositePart, DependencyNode, Origin, Severity, ids};

pub fn run(
    node: &DependencyNode,
    root: &CompositePart,
    cfg: &EffectiveConfig,
    report: &mut Report,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_ASSETS_COMPONENT_ORIGIN) else {
        return;
    };

    root.walk(&mut |part| {
        for component in &part.components {
            if let Decision::Deny(message) = check_component(component, cfg, policy) {
                report.push_violation(
                    ReportEntry::for_node(
                        node,
                        Severity::Error,
                        ids::CHECK_ASSETS_COMPONENT_ORIGIN,
                        ids::CODE_CUSTOM_COMPONENT,
                    )
                    .with_node_name(&part.name)
                    .with_message(message),
                );
            }
        }
    });
}

/// A component passes when it is explicitly allowed, tagged built-in, or (untagged)
/// defined under one of the built-in namespace roots.
pub fn check_component(
    component: &ComponentRef,
    cfg: &EffectiveConfig,
    policy: &CheckPolicy,
) -> Decision {
    if component.missing || policy.allows(&component.type_name) {
        return Decision::Allow;
    }

    let builtin = match component.origin {
        Some(Origin::BuiltIn) => true,
        Some(Origin::Custom) => false,
        None => component
            .effective_namespace()
            .is_some_and(|ns| is_under_namespace(ns, &cfg.builtin_namespaces)),
    };

    if builtin {
        Decision::Allow
    } else {
        Decision::Deny(format!(
            "Custom Component of type {} not allowed. Only {} Components are allowed.",
            component.type_name,
            cfg.builtin_namespaces.join(", ")
        ))
    }
}

fn is_under_namespace(ns: &str, roots: &[String]) -> bool {
    roots.iter().any(|root| {
        !root.is_empty()
            && (ns == root
                || ns
                    .strip_prefix(root.as_str())
                    .is_some_and(|rest| rest.starts_with('.')))
    })
}
