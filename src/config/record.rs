use super::raw::RawConfig;
use super::schema::ConfigKey;
use crate::error::ParseError;
use crate::layout::{self, Window};

/// Resolved configuration handed to session creation.
///
/// Every field is a plain string; a key never set anywhere is `""`.
/// `tmux_layout` is already in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    pub worktree_dir: String,
    pub terminal: String,
    pub sandbox_tool: String,
    /// Comma-joined list of files copied into new worktrees.
    pub copy_files: String,
    pub pre_session_cmd: String,
    pub tmux_layout: String,
}

impl ConfigRecord {
    pub fn from_raw(raw: &RawConfig) -> Self {
        let field = |key| raw.get(key).unwrap_or_default().to_string();
        Self {
            worktree_dir: field(ConfigKey::WorktreeDir),
            terminal: field(ConfigKey::Terminal),
            sandbox_tool: field(ConfigKey::SandboxTool),
            copy_files: field(ConfigKey::CopyFiles),
            pre_session_cmd: field(ConfigKey::PreSessionCmd),
            tmux_layout: field(ConfigKey::TmuxLayout),
        }
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::WorktreeDir => &self.worktree_dir,
            ConfigKey::Terminal => &self.terminal,
            ConfigKey::SandboxTool => &self.sandbox_tool,
            ConfigKey::CopyFiles => &self.copy_files,
            ConfigKey::PreSessionCmd => &self.pre_session_cmd,
            ConfigKey::TmuxLayout => &self.tmux_layout,
        }
    }

    /// `copy_files` split on commas, trimmed, empty entries dropped.
    pub fn copy_file_list(&self) -> Vec<&str> {
        self.copy_files
            .split(',')
            .map(str::trim)
            .filter(|file| !file.is_empty())
            .collect()
    }

    /// The custom layout as windows. Empty when no layout is configured.
    pub fn windows(&self) -> Result<Vec<Window>, ParseError> {
        layout::tokenize(&self.tmux_layout)
    }
}
