//! TOML config syntax.
//!
//! ```toml
//! worktree_dir = "~/worktrees"
//! terminal = "iterm2"
//! copy_files = [".env", ".env.local"]
//! tmux_layout = """
//!   dev:hx|lazygit
//!   server:bin/server
//!   agent:
//! """
//! ```
//!
//! `copy_files` and `tmux_layout` accept a string or an array of strings.
//! Arrays are joined with `,` for `copy_files` and with a space for
//! `tmux_layout`, which is then normalized. Every other key takes a string.

use super::raw::RawConfig;
use super::schema::{ConfigKey, Schema};
use crate::error::ParseError;
use crate::layout;

const EXPECTED_STRING: &str = "a string";
const EXPECTED_STRING_OR_LIST: &str = "a string or an array of strings";

pub fn parse(text: &str, schema: &Schema) -> Result<RawConfig, ParseError> {
    let table = text
        .parse::<toml::Table>()
        .map_err(|e| ParseError::InvalidStructured {
            message: e.message().to_string(),
        })?;

    let mut config = RawConfig::new();
    for (name, value) in &table {
        let key = schema.lookup(name).ok_or_else(|| ParseError::UnknownKey {
            key: name.clone(),
            line: None,
        })?;

        let value = match key {
            ConfigKey::CopyFiles => string_or_list(key, value, ",")?,
            ConfigKey::TmuxLayout => layout::normalize(&string_or_list(key, value, " ")?),
            ConfigKey::WorktreeDir
            | ConfigKey::Terminal
            | ConfigKey::SandboxTool
            | ConfigKey::PreSessionCmd => value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid_value(key, EXPECTED_STRING))?,
        };
        config.insert(key, value);
    }

    Ok(config)
}

fn string_or_list(key: ConfigKey, value: &toml::Value, separator: &str) -> Result<String, ParseError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| invalid_value(key, EXPECTED_STRING_OR_LIST))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|items| items.join(separator)),
        _ => Err(invalid_value(key, EXPECTED_STRING_OR_LIST)),
    }
}

fn invalid_value(key: ConfigKey, expected: &'static str) -> ParseError {
    ParseError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

/// Render a mapping as TOML, keys in schema order.
///
/// Fails if the mapping holds a key the schema doesn't know.
pub fn encode(config: &RawConfig, schema: &Schema) -> Result<String, ParseError> {
    if let Some((key, _)) = config.iter().find(|(key, _)| !schema.contains(*key)) {
        return Err(ParseError::UnknownKey {
            key: key.to_string(),
            line: None,
        });
    }

    let mut table = toml::Table::new();
    for &key in schema.keys() {
        if let Some(value) = config.get(key) {
            table.insert(key.to_string(), toml::Value::String(value.to_string()));
        }
    }

    toml::to_string(&table).map_err(|e| ParseError::Encode {
        message: e.to_string(),
    })
}
