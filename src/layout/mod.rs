//! Tmux layout description language
//!
//! A layout lists named windows, each with an ordered list of pane commands:
//!
//! ```text
//! dev:hx|lazygit;server:bin/server;agent:
//! ```
//!
//! - `;` (or `,`, or a newline) separates windows
//! - `:` separates a window name from its panes
//! - `|` separates panes within a window
//!
//! An empty pane means an interactive shell with no command. The first
//! window becomes the active window of the session.
//!
//! Raw values from config files go through [`normalize`] first (the config
//! parsers do this when storing `tmux_layout`), then [`tokenize`] produces
//! the [`Window`] list handed to the session driver.

mod normalize;
mod tokenize;

pub use normalize::normalize;
pub use tokenize::tokenize;

use serde::Serialize;

/// A tmux window with a name and its pane commands.
///
/// `panes` is never empty; `""` stands for a shell prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub name: String,
    pub panes: Vec<String>,
}

impl Window {
    pub fn new(name: impl Into<String>, panes: Vec<String>) -> Self {
        let panes = if panes.is_empty() {
            vec![String::new()]
        } else {
            panes
        };
        Self {
            name: name.into(),
            panes,
        }
    }

    /// A window with a single pane.
    pub fn single(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(name, vec![command.into()])
    }
}

/// Normalize and tokenize a raw layout value in one step.
pub fn parse(raw: &str) -> Result<Vec<Window>, crate::error::ParseError> {
    tokenize(&normalize(raw))
}
