use assetpack_domain::policy::{CheckPolicy, EffectiveConfig};
use assetpack_types::ids;

pub const DEFAULT_PROFILE: &str = "strict";

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into project config.
pub fn preset(profile: &str) -> anyhow::Result<EffectiveConfig> {
    match profile {
        "strict" => Ok(strict_profile()),
        "compat" => Ok(compat_profile()),
        other => anyhow::bail!("unknown profile: {other} (expected 'strict' or 'compat')"),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig::with_defaults("strict")
}

fn compat_profile() -> EffectiveConfig {
    // Legacy content often carries custom scripts; keep library and texture checks only.
    let mut cfg = EffectiveConfig::with_defaults("compat");
    cfg.checks.insert(
        ids::CHECK_ASSETS_COMPONENT_ORIGIN.to_string(),
        CheckPolicy::disabled(),
    );
    cfg
}
