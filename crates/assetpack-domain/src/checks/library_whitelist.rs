use crate::checks::Decision;
use crate::policy::{CheckPolicy, EffectiveConfig};
use crate::report::{Report, ReportEntry};
use assetpack_types::{DependencyNode, Severity, ids};

pub fn run(node: &DependencyNode, cfg: &EffectiveConfig, report: &mut Report) {
    let Some(policy) = cfg.check_policy(ids::CHECK_ASSETS_LIBRARY_WHITELIST) else {
        return;
    };

    match check_library(node.file_name(), cfg, policy) {
        Decision::Ignore => report.mark_ignored(node),
        Decision::Deny(message) => report.push_violation(
            ReportEntry::for_node(
                node,
                Severity::Error,
                ids::CHECK_ASSETS_LIBRARY_WHITELIST,
                ids::CODE_UNSUPPORTED_LIBRARY,
            )
            .with_message(message),
        ),
        Decision::Allow | Decision::Record(_) => {}
    }
}

/// Exact, case-sensitive file name match against the whitelist.
pub fn check_library(file_name: &str, cfg: &EffectiveConfig, policy: &CheckPolicy) -> Decision {
    if cfg.library_whitelist.contains(file_name) || policy.allows(file_name) {
        return Decision::Ignore;
    }

    Decision::Deny(format!(
        "Unsupported dll : {}. This usually happens when using a custom script or when using a \
         script that is not compatible with all platforms (i.e. a script that is only compatible \
         with HoloLens but not iOS).",
        file_name
    ))
}
