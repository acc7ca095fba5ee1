//! Legacy `key=value` config syntax.
//!
//! ```text
//! # comment
//! worktree_dir = ~/worktrees
//! copy_files = .env,.env.local
//! tmux_layout = [
//!   dev:hx|lazygit
//!   server:bin/server
//!   agent:
//! ]
//! ```
//!
//! Only read for migration and for files that haven't been migrated yet.
//! Array values (`[...]`, single- or multi-line) are joined with spaces;
//! `tmux_layout` is always normalized.

use super::raw::RawConfig;
use super::schema::{ConfigKey, Schema};
use crate::error::ParseError;
use crate::layout;

/// A multi-line array that hasn't been closed yet.
struct PendingArray {
    key: ConfigKey,
    name: String,
    values: Vec<String>,
}

impl PendingArray {
    fn push(&mut self, value: &str) {
        if !value.is_empty() {
            self.values.push(value.to_string());
        }
    }
}

pub fn parse(text: &str, schema: &Schema) -> Result<RawConfig, ParseError> {
    let mut config = RawConfig::new();
    let mut pending: Option<PendingArray> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        if let Some(array) = pending.as_mut() {
            if line.starts_with('#') {
                continue;
            }
            if let Some(last) = line.strip_suffix(']') {
                array.push(last.trim());
                if let Some(array) = pending.take() {
                    store(&mut config, array.key, array.values.join(" "));
                }
                continue;
            }
            array.push(line);
            continue;
        }

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            return Err(ParseError::InvalidLine {
                line: line_number,
                content: line.to_string(),
            });
        };
        let name = name.trim();
        let value = value.trim();

        if name.is_empty() {
            return Err(ParseError::EmptyKey { line: line_number });
        }
        let key = schema.lookup(name).ok_or_else(|| ParseError::UnknownKey {
            key: name.to_string(),
            line: Some(line_number),
        })?;

        let Some(rest) = value.strip_prefix('[') else {
            store(&mut config, key, value.to_string());
            continue;
        };

        if let Some(content) = rest.strip_suffix(']') {
            store(&mut config, key, content.trim().to_string());
            continue;
        }

        let mut array = PendingArray {
            key,
            name: name.to_string(),
            values: Vec::new(),
        };
        array.push(rest.trim());
        pending = Some(array);
    }

    if let Some(array) = pending {
        return Err(ParseError::UnclosedArray { key: array.name });
    }

    Ok(config)
}

fn store(config: &mut RawConfig, key: ConfigKey, value: String) {
    let value = if key == ConfigKey::TmuxLayout {
        layout::normalize(&value)
    } else {
        value
    };
    config.insert(key, value);
}
