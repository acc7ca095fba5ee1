//! Interface to the tmux session driver.
//!
//! The driver that talks to tmux lives outside this crate's core; it
//! receives a [`SessionConfig`] and the ordered [`Window`] list built here.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::config::ConfigRecord;
use crate::error::ParseError;
use crate::layout::{self, Window};
use crate::sandbox;

/// Window names of the layout used when `tmux_layout` is empty.
pub const DEFAULT_WINDOWS: [&str; 2] = ["dev", "agent"];

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session {session} already exists")]
    AlreadyExists { session: String },
    #[error("invalid tmux_layout: {0}")]
    Layout(#[from] ParseError),
    #[error(transparent)]
    Driver(#[from] anyhow::Error),
}

/// Everything the driver needs to create a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub session_name: String,
    /// Working directory of every window.
    pub worktree_path: PathBuf,
    pub sandbox_tool: String,
    /// Sent to the agent window of the default layout.
    pub run_command: String,
    /// Canonical layout string; empty selects the default layout.
    pub custom_layout: String,
}

impl SessionConfig {
    pub fn new(
        session_name: impl Into<String>,
        worktree_path: impl Into<PathBuf>,
        config: &ConfigRecord,
    ) -> Self {
        Self {
            session_name: session_name.into(),
            worktree_path: worktree_path.into(),
            sandbox_tool: config.sandbox_tool.clone(),
            run_command: String::new(),
            custom_layout: config.tmux_layout.clone(),
        }
    }

    pub fn with_run_command(mut self, command: impl Into<String>) -> Self {
        self.run_command = command.into();
        self
    }

    /// A `tmux` command, wrapped in `sandbox_tool` when one is set.
    pub fn tmux_command(&self, args: &[&str]) -> Command {
        sandbox::command(&self.sandbox_tool, "tmux", args)
    }

    /// Windows to create, in order. The first becomes the active window.
    pub fn windows(&self) -> Result<Vec<Window>, ParseError> {
        if self.custom_layout.trim().is_empty() {
            return Ok(default_layout(&self.run_command));
        }
        layout::tokenize(&self.custom_layout)
    }
}

/// A `dev` shell window and an `agent` window running `run_command`.
pub fn default_layout(run_command: &str) -> Vec<Window> {
    let [dev, agent] = DEFAULT_WINDOWS;
    vec![Window::single(dev, ""), Window::single(agent, run_command)]
}

/// Creates and inspects tmux sessions.
pub trait SessionDriver {
    fn has_session(&self, session: &str) -> bool;

    /// Create a detached session with `windows`, selecting the first.
    fn create_session(&mut self, config: &SessionConfig, windows: &[Window])
    -> anyhow::Result<()>;
}

/// Build the window list and have the driver create the session.
///
/// Returns the window names in creation order.
pub fn start_session<D: SessionDriver + ?Sized>(
    driver: &mut D,
    config: &SessionConfig,
) -> Result<Vec<String>, SessionError> {
    if driver.has_session(&config.session_name) {
        return Err(SessionError::AlreadyExists {
            session: config.session_name.clone(),
        });
    }

    let windows = config.windows()?;
    log::debug!(
        "Creating session {} with {} window(s)",
        config.session_name,
        windows.len()
    );
    driver.create_session(config, &windows)?;

    Ok(windows.into_iter().map(|window| window.name).collect())
}
