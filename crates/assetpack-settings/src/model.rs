use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `assetpack.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetpackConfigV1 {
    /// Optional schema string for tooling (`assetpack.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `compat`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Archive output directory, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Prefix stripped from asset paths to form archive entry names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_prefix: Option<String>,

    /// Suffix of companion metadata files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_suffix: Option<String>,

    /// Deflate level, 0-9.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<u32>,

    /// Namespace roots whose components count as built-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_namespaces: Option<Vec<String>>,

    /// Replaces the default library whitelist when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_whitelist: Option<Vec<String>>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Exact-match entries (semantics are check-specific).
    #[serde(default)]
    pub allow: Vec<String>,
}
