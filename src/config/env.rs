//! Process environment inputs, captured once as a value.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Overrides the directory holding the user-level config file.
pub const CONFIG_DIR_ENV: &str = "MXT_CONFIG_DIR";

/// Directory under the home directory holding the user-level config file.
pub const USER_CONFIG_DIR: &str = ".mxt";

pub const USER_CONFIG_FILE: &str = "config";

/// Home directory and the optional user config directory override.
///
/// Loaders take this instead of reading the process environment, so tests
/// can point them anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    home: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            home: crate::path::home_dir(),
            config_dir: std::env::var_os(CONFIG_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            config_dir: None,
        }
    }

    /// An environment with no home directory; resolution fails with
    /// [`ConfigError::HomeNotSet`].
    pub fn without_home() -> Self {
        Self::default()
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn home(&self) -> Result<&Path, ConfigError> {
        self.home.as_deref().ok_or(ConfigError::HomeNotSet)
    }

    /// `$MXT_CONFIG_DIR/config`, or `~/.mxt/config`.
    pub fn user_config_path(&self) -> Result<PathBuf, ConfigError> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => self.home()?.join(USER_CONFIG_DIR),
        };
        Ok(dir.join(USER_CONFIG_FILE))
    }
}
