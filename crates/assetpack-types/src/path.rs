use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical project-relative asset path (e.g. `Assets/Models/cube.fbx`).
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().trim().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final path segment, e.g. `UnityEngine.UI.dll`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// True when the extension matches `ext` (without the dot), ignoring ASCII case.
    pub fn has_extension(&self, ext: &str) -> bool {
        Utf8Path::new(self.as_str())
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Archive entry name: the path with `prefix` removed once from the front.
    pub fn entry_name(&self, prefix: &str) -> String {
        self.0
            .strip_prefix(prefix)
            .unwrap_or(&self.0)
            .to_string()
    }

    /// False for absolute paths, drive prefixes and any `..` segment.
    pub fn stays_in_project(&self) -> bool {
        let mut segments = self.0.split('/');
        let first = segments.next().unwrap_or_default();
        if self.0.starts_with('/') || first.contains(':') {
            return false;
        }
        std::iter::once(first).chain(segments).all(|seg| seg != "..")
    }
}

impl From<&str> for AssetPath {
    fn from(value: &str) -> Self {
        AssetPath::new(value)
    }
}
