//! Answer validators for the configuration record.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

static MOD_ID_PATTERN: OnceLock<Regex> = OnceLock::new();
static PACKAGE_PART_PATTERN: OnceLock<Regex> = OnceLock::new();

fn mod_id_pattern() -> &'static Regex {
    MOD_ID_PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_]+$").expect("valid mod id pattern"))
}

fn package_part_pattern() -> &'static Regex {
    PACKAGE_PART_PATTERN
        .get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid package pattern"))
}

/// Rejects blank values.
pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError(format!("{field} cannot be blank")));
    }
    Ok(())
}

/// A mod id may only contain `a-z`, `0-9` and `_`.
pub fn validate_mod_id(value: &str) -> Result<()> {
    if mod_id_pattern().is_match(value) {
        return Ok(());
    }
    Err(Error::ValidationError(
        "Only a-z, 0-9, and _ are allowed in the mod id (NeoForge does not allow '-')".into(),
    ))
}

/// Every dot-separated part of a group must start with a letter or underscore
/// and contain only `a-z`, `0-9` or `_`.
pub fn validate_mod_group(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::ValidationError("Package name cannot be empty".into()));
    }
    for part in value.split('.') {
        if !package_part_pattern().is_match(part) {
            return Err(Error::ValidationError(format!(
                "Invalid package part: '{part}', must start with a letter or underscore and contain only a-z, 0-9, or _"
            )));
        }
    }
    Ok(())
}

/// Derives the suggested mod id from a display name by lowercasing it and
/// dropping all whitespace.
pub fn derive_mod_id(mod_name: &str) -> String {
    mod_name.to_lowercase().split_whitespace().collect()
}
