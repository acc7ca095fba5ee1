//! Shell metacharacter checks for config values.
//!
//! Config values end up interpolated into shell command lines (terminal
//! launchers, sandbox prefixes, copy lists). Command keys hold shell content
//! on purpose and are exempt; every other key must be free of the characters
//! below.

use super::raw::RawConfig;
use super::schema::{ConfigKey, Schema};
use crate::error::SecurityError;

/// Characters that could chain or substitute commands.
pub const DANGEROUS_CHARS: &[char] = &['`', '$', ';', '|', '&'];

pub fn contains_metacharacters(value: &str) -> bool {
    value.contains(DANGEROUS_CHARS)
}

/// Validate a single key/value pair.
pub fn validate(schema: &Schema, key: ConfigKey, value: &str) -> Result<(), SecurityError> {
    if schema.is_command_key(key) || !contains_metacharacters(value) {
        return Ok(());
    }
    Err(SecurityError {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Validate every entry in a mapping, failing on the first violation.
pub fn validate_all(schema: &Schema, config: &RawConfig) -> Result<(), SecurityError> {
    config
        .iter()
        .try_for_each(|(key, value)| validate(schema, key, value))
}
