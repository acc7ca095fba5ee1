//! Error types for config resolution and layout parsing
//!
//! - **`ParseError`** - malformed content in either config syntax or in a
//!   layout string. Always fatal to the parse call.
//! - **`SecurityError`** - a non-command field carries shell metacharacters.
//! - **`ConfigError`** - everything that can go wrong while loading,
//!   resolving or migrating config files. File-scoped variants carry the path.
//!
//! A missing optional file is never an error; loaders return an empty
//! mapping instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid format (expected key=value): {content}")]
    InvalidLine { line: usize, content: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    /// `line` is `None` for the structured syntax, where the decoder doesn't
    /// report positions for individual keys.
    #[error("{}", unknown_key_message(key, *line))]
    UnknownKey { key: String, line: Option<usize> },

    #[error("unclosed multi-line array for key {key:?}")]
    UnclosedArray { key: String },

    #[error("invalid TOML: {message}")]
    InvalidStructured { message: String },

    #[error("invalid value for {key:?}: expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    #[error("invalid window spec (missing ':'): {spec}")]
    MissingSeparator { spec: String },

    #[error("empty window name in spec: {spec}")]
    EmptyWindowName { spec: String },

    #[error("failed to encode TOML: {message}")]
    Encode { message: String },
}

fn unknown_key_message(key: &str, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("line {line}: unknown config key {key:?}"),
        None => format!("unknown config key {key:?}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("suspicious value for '{key}': contains shell metacharacters")]
pub struct SecurityError {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME environment variable not set")]
    HomeNotSet,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Content that is neither valid TOML nor valid legacy `key=value` text.
    #[error(
        "failed to parse config file {}: not TOML ({structured}) and not legacy format ({legacy})",
        path.display()
    )]
    Unparseable {
        path: PathBuf,
        structured: ParseError,
        legacy: ParseError,
    },

    #[error("config file {} failed security validation: {source}", path.display())]
    Security {
        path: PathBuf,
        #[source]
        source: SecurityError,
    },

    #[error("failed to encode TOML config {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
