use std::path::{Path, PathBuf};

/// Home directory of the current user, `None` if it can't be determined.
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}

/// Format a filesystem path for user-facing output.
///
/// Replaces the home directory prefix with `~` (e.g. `/Users/alex/.mxt/config` -> `~/.mxt/config`).
/// Paths outside home are returned unchanged.
pub fn format_path_for_display(path: &Path) -> String {
    match home_dir() {
        Some(home) => shorten_home(path, &home),
        None => path.display().to_string(),
    }
}

fn shorten_home(path: &Path, home: &Path) -> String {
    let Ok(stripped) = path.strip_prefix(home) else {
        return path.display().to_string();
    };
    if stripped.as_os_str().is_empty() {
        return "~".to_string();
    }
    Path::new("~").join(stripped).display().to_string()
}
