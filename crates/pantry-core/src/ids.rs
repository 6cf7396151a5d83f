//! ID prefixes for catalogue entities.
//!
//! IDs are `{prefix}-{8 hex chars}`, generated by the database layer.

/// Prefix for catalogued recipe IDs.
pub const PREFIX_RECIPE: &str = "rcp";

/// Format an ID from a prefix and a hex suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Split an ID into its prefix, if it carries one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
