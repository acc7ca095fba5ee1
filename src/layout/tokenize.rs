use super::Window;
use crate::error::ParseError;

/// Window separators accepted by the tokenizer.
///
/// Canonical input only uses `;`, but layouts handed over without going
/// through [`normalize`](super::normalize) may still use commas or newlines.
const WINDOW_SEPARATORS: &[char] = &[';', ',', '\n', '\r'];

/// Parse a layout string into windows, in order.
///
/// Format: `window:pane1|pane2;window2:pane3`. An empty string yields no
/// windows. A window with nothing after `:` gets one empty pane (a shell).
pub fn tokenize(layout: &str) -> Result<Vec<Window>, ParseError> {
    layout
        .split(WINDOW_SEPARATORS)
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(parse_window)
        .collect()
}

fn parse_window(spec: &str) -> Result<Window, ParseError> {
    let Some((name, panes)) = spec.split_once(':') else {
        return Err(ParseError::MissingSeparator {
            spec: spec.to_string(),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyWindowName {
            spec: spec.to_string(),
        });
    }

    let panes = panes.trim();
    let panes = if panes.is_empty() {
        vec![String::new()]
    } else {
        panes.split('|').map(|pane| pane.trim().to_string()).collect()
    };

    Ok(Window {
        name: name.to_string(),
        panes,
    })
}
