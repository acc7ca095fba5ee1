//! Project root discovery.
//!
//! Config resolution only needs one thing from version control: the root
//! of the project containing a directory. [`ProjectLocator`] is that seam;
//! [`GitLocator`] answers it with `git rev-parse --show-toplevel`.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::shell_exec;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("{0}")]
    CommandFailed(String),
}

/// Finds the project root for a directory.
pub trait ProjectLocator {
    /// `None` when `dir` isn't inside a project.
    fn project_root(&self, dir: &Path) -> Option<PathBuf>;
}

impl<F> ProjectLocator for F
where
    F: Fn(&Path) -> Option<PathBuf>,
{
    fn project_root(&self, dir: &Path) -> Option<PathBuf> {
        self(dir)
    }
}

/// Locates projects as git worktrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLocator;

impl ProjectLocator for GitLocator {
    fn project_root(&self, dir: &Path) -> Option<PathBuf> {
        Repository::at(dir)
            .worktree_root()
            .inspect_err(|e| {
                log::debug!(
                    "No git worktree at {}: {}",
                    dir.display(),
                    e.to_string().trim()
                )
            })
            .ok()
    }
}

/// Repository context for git operations.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Top-level directory of the worktree containing this path.
    pub fn worktree_root(&self) -> Result<PathBuf, GitError> {
        let stdout = self.run_command(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(stdout.trim()))
    }

    pub fn run_command(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.current_dir(&self.path);

        let context = self.path.display().to_string();
        let output = shell_exec::run(&mut cmd, Some(&context))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.into_owned()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
