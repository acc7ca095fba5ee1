//! Configuration and layout core of muxtree (`mxt`), a git worktree + tmux
//! session manager.
//!
//! - [`config`] resolves the layered user/project configuration
//! - [`layout`] parses the tmux window/pane layout language
//! - [`session`] turns a resolved config into the windows of a session
//!
//! The library API is not stable.

pub mod config;
pub mod error;
pub mod git;
pub mod layout;
pub mod path;
pub mod sandbox;
pub mod session;
pub mod shell_exec;
pub mod styling;
