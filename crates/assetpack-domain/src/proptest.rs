//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - clean inputs always passing with one statistic per texture
//! - non-whitelisted libraries always failing without being ignored
//! - whitelisted libraries always ignored without being flagged
//! - analysis determinism

use crate::engine::analyze;
use crate::policy::DEFAULT_LIBRARY_WHITELIST;
use crate::test_support::{composite, config, library, texture};
use assetpack_types::{ComponentRef, DependencyNode};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_builtin_component() -> impl Strategy<Value = ComponentRef> {
    prop::string::string_regex("UnityEngine(\\.[A-Z][a-zA-Z]{0,12}){1,3}")
        .unwrap()
        .prop_map(|t| ComponentRef::named(&t))
}

fn arb_whitelisted_name() -> impl Strategy<Value = String> {
    prop::sample::select(DEFAULT_LIBRARY_WHITELIST).prop_map(|s| s.to_string())
}

fn arb_custom_library_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z]{0,12}\\.dll")
        .unwrap()
        .prop_filter("must not be whitelisted", |n| {
            !DEFAULT_LIBRARY_WHITELIST.contains(&n.as_str())
        })
}

/// A clean node: built-in composite, whitelisted library, or texture.
fn arb_clean_node(index: usize) -> impl Strategy<Value = DependencyNode> {
    prop_oneof![
        prop::collection::vec(arb_builtin_component(), 0..4).prop_map(move |components| {
            composite(
                &format!("c{index}"),
                &format!("Part{index}"),
                &format!("Assets/Part{index}.prefab"),
                components,
            )
        }),
        arb_whitelisted_name().prop_map(move |name| {
            library(&format!("l{index}"), &format!("Assets/Plugins/{name}"))
        }),
        (1u32..4096, 1u32..4096).prop_map(move |(w, h)| texture(&format!("t{index}"), w, h)),
    ]
}

fn arb_clean_deps() -> impl Strategy<Value = Vec<DependencyNode>> {
    (0usize..12).prop_flat_map(|len| {
        (0..len).map(arb_clean_node).collect::<Vec<_>>()
    })
}

fn target() -> DependencyNode {
    composite("root", "Root", "Assets/Root.prefab", Vec::new())
}

proptest! {
    #[test]
    fn clean_inputs_pass_with_one_statistic_per_texture(deps in arb_clean_deps()) {
        let report = analyze(&target(), &deps, &config());

        prop_assert!(report.success());
        prop_assert!(report.violations().is_empty());

        let expected: Vec<String> = deps
            .iter()
            .filter_map(|n| match n.kind {
                assetpack_types::NodeKind::Texture { width, height } => {
                    Some(format!("{width}x{height}"))
                }
                _ => None,
            })
            .collect();
        let actual: Vec<String> = report
            .statistics()
            .iter()
            .map(|s| s.message.clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn custom_library_fails_and_is_not_ignored(
        deps in arb_clean_deps(),
        name in arb_custom_library_name(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut deps = deps;
        let plugin = library("plugin", &format!("Assets/Plugins/{name}"));
        let at = position.index(deps.len() + 1);
        deps.insert(at, plugin.clone());

        let report = analyze(&target(), &deps, &config());

        prop_assert!(!report.success());
        let for_plugin = report
            .violations()
            .iter()
            .filter(|v| v.node_id == plugin.id)
            .count();
        prop_assert_eq!(for_plugin, 1);
        prop_assert!(!report.is_ignored(&plugin));
    }

    #[test]
    fn whitelisted_library_is_ignored_not_flagged(
        deps in arb_clean_deps(),
        name in arb_whitelisted_name(),
    ) {
        let mut deps = deps;
        let lib = library("whitelisted", &format!("Assets/Plugins/{name}"));
        deps.push(lib.clone());

        let report = analyze(&target(), &deps, &config());

        prop_assert!(report.success());
        prop_assert!(report.is_ignored(&lib));
        prop_assert!(report.violations().iter().all(|v| v.node_id != lib.id));
    }

    #[test]
    fn analysis_is_deterministic(
        deps in arb_clean_deps(),
        names in prop::collection::vec(arb_custom_library_name(), 0..4),
    ) {
        let mut deps = deps;
        for (i, name) in names.iter().enumerate() {
            deps.push(library(&format!("p{i}"), &format!("Assets/Plugins/{name}")));
        }

        let first = analyze(&target(), &deps, &config());
        let second = analyze(&target(), &deps, &config());
        prop_assert_eq!(first, second);
    }
}
