//! The closed set of recognized config keys.
//!
//! Both parsers and the encoder look keys up through a [`Schema`] value, and
//! the security validator asks the same value which keys hold shell content.
//! Nothing here is process-wide mutable state.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A recognized config key.
///
/// Declaration order is the order keys are written when encoding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    WorktreeDir,
    Terminal,
    SandboxTool,
    CopyFiles,
    PreSessionCmd,
    TmuxLayout,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Which keys a file may contain, and which of them carry shell content
/// that is exempt from metacharacter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    keys: &'static [ConfigKey],
    command_keys: &'static [ConfigKey],
}

const ALL_KEYS: &[ConfigKey] = &[
    ConfigKey::WorktreeDir,
    ConfigKey::Terminal,
    ConfigKey::SandboxTool,
    ConfigKey::CopyFiles,
    ConfigKey::PreSessionCmd,
    ConfigKey::TmuxLayout,
];

const COMMAND_KEYS: &[ConfigKey] = &[ConfigKey::PreSessionCmd, ConfigKey::TmuxLayout];

impl Schema {
    /// The current schema: all six keys, with the pre-session command and
    /// the layout string exempt from validation.
    pub const CURRENT: Schema = Schema {
        keys: ALL_KEYS,
        command_keys: COMMAND_KEYS,
    };

    /// The schema before `sandbox_tool` existed.
    pub const V1: Schema = Schema {
        keys: &[
            ConfigKey::WorktreeDir,
            ConfigKey::Terminal,
            ConfigKey::CopyFiles,
            ConfigKey::PreSessionCmd,
            ConfigKey::TmuxLayout,
        ],
        command_keys: COMMAND_KEYS,
    };

    pub const fn new(keys: &'static [ConfigKey], command_keys: &'static [ConfigKey]) -> Self {
        Self { keys, command_keys }
    }

    /// Resolve a key name from a file. `None` if the name isn't part of this schema.
    pub fn lookup(&self, name: &str) -> Option<ConfigKey> {
        name.parse::<ConfigKey>()
            .ok()
            .filter(|key| self.contains(*key))
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_command_key(&self, key: ConfigKey) -> bool {
        self.command_keys.contains(&key)
    }

    pub fn keys(&self) -> &'static [ConfigKey] {
        self.keys
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::CURRENT
    }
}
