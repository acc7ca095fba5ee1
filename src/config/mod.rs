//! Configuration system for muxtree
//!
//! # User Config (`~/.mxt/config`)
//!
//! Personal defaults, not checked into git. The directory can be moved with
//! `MXT_CONFIG_DIR`.
//!
//! # Project Config (`<repo>/.mxt`)
//!
//! Project-specific settings at the repository root. Overrides the user
//! config key by key.
//!
//! # Keys
//!
//! - `worktree_dir` - Where worktrees are created (`~` is expanded)
//! - `terminal` - Terminal application sessions are opened in
//! - `sandbox_tool` - Command prefix every tmux invocation is wrapped in
//! - `copy_files` - Comma-separated files copied into new worktrees
//! - `pre_session_cmd` - Shell command run before the session starts
//! - `tmux_layout` - Window/pane layout, see [`crate::layout`]
//!
//! Any other key is an error. Values of every key except `pre_session_cmd`
//! and `tmux_layout` must not contain shell metacharacters.
//!
//! # Syntax
//!
//! Files are TOML. Files in the older `key=value` syntax are still read
//! and can be converted with `mxt config migrate`.

mod env;
pub mod legacy;
mod loader;
mod migrate;
mod raw;
mod record;
mod schema;
pub mod security;
pub mod structured;

use std::path::Path;

pub use env::{CONFIG_DIR_ENV, Environment, USER_CONFIG_DIR, USER_CONFIG_FILE};
pub use loader::{
    ConfigLoader, ConfigSource, DEFAULT_TERMINAL, DEFAULT_WORKTREE_SUBDIR, FileFormat, FormatMode,
    PROJECT_CONFIG_FILE, Resolved, SourceKind, defaults, expand_tilde, load_file, parse_content,
    read_file,
};
pub use migrate::{MigrateOutcome, migrate, migrate_with};
pub use raw::RawConfig;
pub use record::ConfigRecord;
pub use schema::{ConfigKey, Schema};

use crate::error::ConfigError;

/// Resolve config for `work_dir` from the process environment and git.
pub fn resolve(work_dir: &Path) -> Result<ConfigRecord, ConfigError> {
    ConfigLoader::from_process().resolve(work_dir)
}
