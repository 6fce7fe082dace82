use crate::checks::Decision;
use crate::policy::EffectiveConfig;
use crate::report::{Report, ReportEntry};
use assetpack_types::{DependencyNode, Severity, ids};

pub fn run(
    node: &DependencyNode,
    width: u32,
    height: u32,
    cfg: &EffectiveConfig,
    report: &mut Report,
) {
    if cfg.check_policy(ids::CHECK_ASSETS_TEXTURE_STATS).is_none() {
        return;
    }

    if let Decision::Record(message) = check_texture(width, height) {
        report.push_statistic(
            ReportEntry::for_node(
                node,
                Severity::Info,
                ids::CHECK_ASSETS_TEXTURE_STATS,
                ids::CODE_TEXTURE_SIZE,
            )
            .with_message(message),
        );
    }
}

pub fn check_texture(width: u32, height: u32) -> Decision {
    Decision::Record(format!("{}x{}", width, height))
}
