//! Stable identifiers for checks and report entry codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_ASSETS_COMPONENT_ORIGIN: &str = "assets.component_origin";
pub const CHECK_ASSETS_LIBRARY_WHITELIST: &str = "assets.library_whitelist";
pub const CHECK_ASSETS_TEXTURE_STATS: &str = "assets.texture_stats";

// Codes: assets.component_origin
pub const CODE_CUSTOM_COMPONENT: &str = "custom_component";

// Codes: assets.library_whitelist
pub const CODE_UNSUPPORTED_LIBRARY: &str = "unsupported_library";

// Codes: assets.texture_stats
pub const CODE_TEXTURE_SIZE: &str = "texture_size";

// Export-level
pub const CHECK_EXPORT_ARCHIVE: &str = "export.archive";
pub const CODE_ARCHIVE_WRITE_FAILED: &str = "archive_write_failed";
pub const CODE_METADATA_MISSING: &str = "metadata_missing";
pub const CODE_DESTINATION_UNAVAILABLE: &str = "destination_unavailable";
pub const CODE_PATH_OUTSIDE_PROJECT: &str = "path_outside_project";
