//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{AssetpackConfigV1, CheckConfig};
pub use resolve::{ExportSettings, Overrides, ResolvedConfig};

/// Parse `assetpack.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AssetpackConfigV1> {
    let cfg: AssetpackConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the analyzer and exporter
/// (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: AssetpackConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
