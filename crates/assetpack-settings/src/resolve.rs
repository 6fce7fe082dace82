use crate::{model::AssetpackConfigV1, presets};
use anyhow::Context;
use assetpack_domain::policy::{CheckPolicy, EffectiveConfig};
use assetpack_types::explain;
use camino::Utf8PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "Exports";
pub const DEFAULT_ASSET_PREFIX: &str = "Assets/";
pub const DEFAULT_METADATA_SUFFIX: &str = ".meta";
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 5;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub output_dir: Option<String>,
    pub compression_level: Option<u32>,
}

/// Archive settings, independent of policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSettings {
    /// Relative to the project root unless absolute.
    pub output_dir: Utf8PathBuf,
    pub asset_prefix: String,
    pub metadata_suffix: String,
    pub compression_level: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: Utf8PathBuf::from(DEFAULT_OUTPUT_DIR),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            metadata_suffix: DEFAULT_METADATA_SUFFIX.to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub export: ExportSettings,
}

pub fn resolve_config(
    cfg: AssetpackConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile)?;

    if let Some(namespaces) = cfg.builtin_namespaces.as_ref() {
        if namespaces.is_empty() || namespaces.iter().any(|ns| ns.trim().is_empty()) {
            anyhow::bail!("builtin_namespaces must be a non-empty list of non-empty names");
        }
        effective.builtin_namespaces = namespaces.clone();
    }

    if let Some(whitelist) = cfg.library_whitelist.as_ref() {
        effective.library_whitelist = whitelist.iter().cloned().collect();
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        validate_check_id(check_id)?;
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    let mut export = ExportSettings::default();
    if let Some(dir) = overrides.output_dir.clone().or(cfg.output_dir.clone()) {
        if dir.trim().is_empty() {
            anyhow::bail!("output_dir must not be empty");
        }
        export.output_dir = Utf8PathBuf::from(dir);
    }
    if let Some(prefix) = cfg.asset_prefix.clone() {
        export.asset_prefix = prefix;
    }
    if let Some(suffix) = cfg.metadata_suffix.clone() {
        if suffix.is_empty() {
            anyhow::bail!("metadata_suffix must not be empty");
        }
        export.metadata_suffix = suffix;
    }
    if let Some(level) = overrides.compression_level.or(cfg.compression_level) {
        export.compression_level =
            parse_compression_level(level).context("invalid compression_level")?;
    }

    Ok(ResolvedConfig { effective, export })
}

/// Only checks with a config table in the explain registry can be tuned.
fn validate_check_id(check_id: &str) -> anyhow::Result<()> {
    let configurable: Vec<&str> = explain::all_explanations()
        .iter()
        .filter(|e| e.config.is_some())
        .map(|e| e.check_id)
        .collect();
    if !configurable.contains(&check_id) {
        anyhow::bail!(
            "unknown check id [checks.\"{check_id}\"] (configurable: {})",
            configurable.join(", ")
        );
    }
    Ok(())
}

fn validate_allowlist(check_id: &str, entries: &[String]) -> anyhow::Result<()> {
    for entry in entries {
        if entry.trim().is_empty() {
            anyhow::bail!("empty allow entry for {check_id}");
        }
    }
    Ok(())
}

fn parse_compression_level(level: u32) -> anyhow::Result<u32> {
    match level {
        0..=9 => Ok(level),
        other => anyhow::bail!("compression level {other} out of range (expected 0-9)"),
    }
}
