#![allow(dead_code)]

//! # Test utilities for muxtree
//!
//! [`TestEnv`] gives each test its own home directory and project root in
//! temporary directories. Library tests build a [`ConfigLoader`] against
//! them; CLI tests run the `mxt` binary with `HOME` and `MXT_CONFIG_DIR`
//! pointed at them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use muxtree::config::{
    CONFIG_DIR_ENV, ConfigLoader, Environment, PROJECT_CONFIG_FILE, USER_CONFIG_DIR,
    USER_CONFIG_FILE,
};
use tempfile::TempDir;

pub struct TestEnv {
    home: TempDir,
    project: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn project_root(&self) -> &Path {
        self.project.path()
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.home().join(USER_CONFIG_DIR).join(USER_CONFIG_FILE)
    }

    pub fn project_config_path(&self) -> PathBuf {
        self.project_root().join(PROJECT_CONFIG_FILE)
    }

    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.user_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_config_path();
        fs::write(&path, content).unwrap();
        path
    }

    /// Loader that treats `project_root()` as the enclosing project of any directory.
    pub fn loader(&self) -> ConfigLoader<impl Fn(&Path) -> Option<PathBuf> + use<>> {
        let root = self.project_root().to_path_buf();
        ConfigLoader::new(Environment::new(self.home()), move |_: &Path| {
            Some(root.clone())
        })
    }

    /// Loader for a directory outside any project.
    pub fn loader_outside_project(&self) -> ConfigLoader<fn(&Path) -> Option<PathBuf>> {
        fn no_project(_: &Path) -> Option<PathBuf> {
            None
        }
        ConfigLoader::new(Environment::new(self.home()), no_project as fn(&Path) -> Option<PathBuf>)
    }

    /// `mxt` with an isolated home, run against `dir`.
    pub fn mxt_command(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mxt"));
        cmd.arg("-C").arg(dir);
        cmd.env("HOME", self.home());
        cmd.env_remove(CONFIG_DIR_ENV);
        cmd.env_remove("RUST_LOG");
        // Keep git from finding a repository above the temp directories.
        if let Some(parent) = self.project_root().parent() {
            cmd.env("GIT_CEILING_DIRECTORIES", parent);
        }
        cmd
    }
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Initialize a git repository at `dir`.
pub fn git_init(dir: &Path) {
    let output = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "git init failed: {output:?}");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
