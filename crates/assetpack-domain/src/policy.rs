use assetpack_types::ids;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Namespace root of the platform's built-in runtime components.
pub const DEFAULT_BUILTIN_NAMESPACE: &str = "UnityEngine";

/// Libraries assumed present in every target environment.
pub const DEFAULT_LIBRARY_WHITELIST: &[&str] = &[
    "UnityEngine.UI.dll",
    "UnityEngine.Networking.dll",
    "UnityEngine.UIAutomation.dll",
    "UnityEngine.SpatialTracking.dll",
    "UnityEngine.Timeline.dll",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPolicy {
    pub enabled: bool,
    /// Check-specific exact-match entries (type names or library file names).
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            allow: Vec::new(),
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.allow.iter().any(|a| a == value)
    }
}

/// Read-only policy configuration shared by every analysis pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub builtin_namespaces: Vec<String>,
    pub library_whitelist: BTreeSet<String>,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }

    /// All checks enabled with the default namespace and whitelist.
    pub fn with_defaults(profile: &str) -> Self {
        let checks = [
            ids::CHECK_ASSETS_COMPONENT_ORIGIN,
            ids::CHECK_ASSETS_LIBRARY_WHITELIST,
            ids::CHECK_ASSETS_TEXTURE_STATS,
        ]
        .into_iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled()))
        .collect();

        Self {
            profile: profile.to_string(),
            builtin_namespaces: vec![DEFAULT_BUILTIN_NAMESPACE.to_string()],
            library_whitelist: DEFAULT_LIBRARY_WHITELIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_policy_is_hidden() {
        let mut cfg = EffectiveConfig::with_defaults("test");
        cfg.checks.insert(
            ids::CHECK_ASSETS_TEXTURE_STATS.to_string(),
            CheckPolicy::disabled(),
        );
        assert!(cfg.check_policy(ids::CHECK_ASSETS_TEXTURE_STATS).is_none());
        assert!(cfg.check_policy(ids::CHECK_ASSETS_LIBRARY_WHITELIST).is_some());
    }

    #[test]
    fn allow_is_exact_and_case_sensitive() {
        let mut policy = CheckPolicy::enabled();
        policy.allow.push("Vendor.dll".to_string());
        assert!(policy.allows("Vendor.dll"));
        assert!(!policy.allows("vendor.dll"));
        assert!(!policy.allows("Vendor.dll.bak"));
    }
}
