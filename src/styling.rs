//! Message formatting for terminal output
//!
//! Messages are built with `color_print::cformat!` tags and carry a leading
//! symbol per kind:
//!
//! - Errors: red `✗`
//! - Warnings: yellow `▲`
//! - Success: green `✓`
//! - Hints and neutral info: dim `↳` / `○`

use std::fmt;

use color_print::{cformat, cstr};

pub const SUCCESS_SYMBOL: &str = cstr!("<green>✓</>");
pub const ERROR_SYMBOL: &str = cstr!("<red>✗</>");
pub const WARNING_SYMBOL: &str = cstr!("<yellow>▲</>");
pub const HINT_SYMBOL: &str = cstr!("<dim>↳</>");
pub const INFO_SYMBOL: &str = cstr!("<dim>○</>");

/// A message that has already been formatted with its symbol and styling.
///
/// Deliberately not `AsRef<str>`, so it can't be passed to another message
/// function and formatted twice:
///
/// ```compile_fail
/// use muxtree::styling::error_message;
///
/// let msg = error_message("first error");
/// let double = error_message(msg);
/// ```
#[derive(Debug, Clone)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn error_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{ERROR_SYMBOL} <red>{}</>", content.as_ref()))
}

pub fn hint_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{HINT_SYMBOL} <dim>{}</>", content.as_ref()))
}

pub fn warning_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{WARNING_SYMBOL} <yellow>{}</>", content.as_ref()))
}

pub fn success_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{SUCCESS_SYMBOL} <green>{}</>", content.as_ref()))
}

/// Neutral status, text left uncolored.
pub fn info_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(format!("{INFO_SYMBOL} {}", content.as_ref()))
}

/// Cyan section heading with an optional suffix (usually a path).
pub fn format_heading(title: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(s) => cformat!("<cyan>{}</>  {}", title, s),
        None => cformat!("<cyan>{}</>", title),
    }
}
