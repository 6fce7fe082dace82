//! Explain registry for checks and codes.
//!
//! Every check owns its codes. Looking up either the check id or one of its codes
//! yields the same [`Explanation`].

use crate::ids;

/// What a check enforces and how to satisfy or configure it.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub check_id: &'static str,
    /// Codes this check can report.
    pub codes: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub remediation: &'static str,
    /// `assetpack.toml` table tuning the check; `None` when it is not configurable.
    pub config: Option<&'static str>,
}

const REGISTRY: &[Explanation] = &[
    Explanation {
        check_id: ids::CHECK_ASSETS_COMPONENT_ORIGIN,
        codes: &[ids::CODE_CUSTOM_COMPONENT],
        title: "Built-in Components Only",
        description: "\
Inspects every component attached to a composite object and all of its children,
including inactive ones. Only components from a built-in runtime namespace can be
loaded by the consuming environment; custom scripts are not shipped with the
archive and would fail to resolve.",
        remediation: "\
Remove the custom component or replace it with a built-in equivalent. If the
consumer provides the type, allow its fully qualified name.",
        config: Some(
            "\
[checks.\"assets.component_origin\"]
allow = [\"Game.Behaviours.Spinner\"]",
        ),
    },
    Explanation {
        check_id: ids::CHECK_ASSETS_LIBRARY_WHITELIST,
        codes: &[ids::CODE_UNSUPPORTED_LIBRARY],
        title: "Whitelisted Libraries Only",
        description: "\
Binary libraries reachable from a target must be on the whitelist. Whitelisted
libraries are assumed to be present in the target environment and are left out
of the archive. Anything else usually comes from custom or platform-specific
native code that will not load everywhere.",
        remediation: "\
Drop the dependency on the library, or allow its exact file name (case-sensitive)
once it is known to be portable.",
        config: Some(
            "\
[checks.\"assets.library_whitelist\"]
allow = [\"MyPlugin.dll\"]",
        ),
    },
    Explanation {
        check_id: ids::CHECK_ASSETS_TEXTURE_STATS,
        codes: &[ids::CODE_TEXTURE_SIZE],
        title: "Texture Statistics",
        description: "\
Records the dimensions of every texture reachable from a target as an
informational statistic. This check never fails a target.",
        remediation: "Nothing to fix. Use the reported sizes to spot oversized textures.",
        config: Some(
            "\
[checks.\"assets.texture_stats\"]
enabled = false",
        ),
    },
    Explanation {
        check_id: ids::CHECK_EXPORT_ARCHIVE,
        codes: &[
            ids::CODE_ARCHIVE_WRITE_FAILED,
            ids::CODE_METADATA_MISSING,
            ids::CODE_DESTINATION_UNAVAILABLE,
            ids::CODE_PATH_OUTSIDE_PROJECT,
        ],
        title: "Archive Export",
        description: "\
Raised when a target passed validation but its archive could not be written.
`metadata_missing`: an asset exists without its `.meta` companion file.
`destination_unavailable`: the output directory could not be created.
`archive_write_failed`: reading an asset or writing the archive failed.
`path_outside_project`: an asset path is absolute or climbs out with `..`.
No partially written archive is left at the destination.",
        remediation: "\
Restore missing `.meta` files, make assets readable, keep asset paths relative
to the project root, or choose a writable `output_dir`. Then export again.",
        config: None,
    },
];

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    REGISTRY
        .iter()
        .find(|e| e.check_id == identifier || e.codes.contains(&identifier))
        .cloned()
}

/// Every registered explanation, in check order.
pub fn all_explanations() -> &'static [Explanation] {
    REGISTRY
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_ASSETS_COMPONENT_ORIGIN,
        ids::CHECK_ASSETS_LIBRARY_WHITELIST,
        ids::CHECK_ASSETS_TEXTURE_STATS,
        ids::CHECK_EXPORT_ARCHIVE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_CUSTOM_COMPONENT,
        ids::CODE_UNSUPPORTED_LIBRARY,
        ids::CODE_TEXTURE_SIZE,
        ids::CODE_ARCHIVE_WRITE_FAILED,
        ids::CODE_METADATA_MISSING,
        ids::CODE_DESTINATION_UNAVAILABLE,
        ids::CODE_PATH_OUTSIDE_PROJECT,
    ]
}
