//! Canonical separator form for layout strings.
//!
//! Users write layouts with `,`, `;` or one window per line (which arrives
//! here space-joined, from a multi-line array or a TOML block string). The
//! canonical form uses `;` between windows, `:` between a window name and
//! its panes, and `|` between panes.
//!
//! Inference only starts windows at words containing `:`; leading words
//! without one (`hx lazygit dev:bin/dev`) become a window of their own,
//! which the tokenizer then rejects for its missing `:`.

/// Normalize a raw layout value.
///
/// When no explicit separator is present, window boundaries are inferred:
/// any whitespace-delimited word containing `:` starts a new window. A pane
/// command that contains such a word (`echo http://host`) is split there.
/// That heuristic is kept for compatibility with existing configs.
pub fn normalize(raw: &str) -> String {
    let layout = raw.replace(['\n', '\r'], " ").replace(',', ";");

    if layout.contains(';') {
        let windows: Vec<&str> = layout
            .split(';')
            .filter(|spec| !spec.trim().is_empty())
            .collect();
        // A single explicit window goes through inference too, otherwise
        // normalizing the output again could split it differently.
        if windows.len() > 1 {
            return windows.join(";");
        }
        return infer_windows(windows.first().copied().unwrap_or_default()).join(";");
    }

    infer_windows(&layout).join(";")
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split space-separated content into windows at `word:` boundaries.
///
/// Each window keeps the original spacing between its words.
fn infer_windows(layout: &str) -> Vec<&str> {
    let mut windows = Vec::new();
    // Byte range of the window being accumulated.
    let mut current: Option<(usize, usize)> = None;

    for (start, word) in words(layout) {
        let end = start + word.len();
        match current {
            Some((window_start, window_end)) if word.contains(':') => {
                windows.push(&layout[window_start..window_end]);
                current = Some((start, end));
            }
            Some((window_start, _)) => current = Some((window_start, end)),
            None => current = Some((start, end)),
        }
    }

    if let Some((window_start, window_end)) = current {
        windows.push(&layout[window_start..window_end]);
    }
    windows
}

/// Whitespace-delimited words with their byte offsets.
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split(is_blank).filter_map(move |word| {
        let start = offset;
        offset += word.len() + 1;
        (!word.is_empty()).then_some((start, word))
    })
}
