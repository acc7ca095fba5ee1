//! Layered config resolution.
//!
//! Sources, later overriding earlier key by key:
//! 1. Built-in defaults
//! 2. User config (`$MXT_CONFIG_DIR/config` or `~/.mxt/config`)
//! 3. Project config (`<project root>/.mxt`), when inside a project
//!
//! Missing files are skipped. Not being inside a project is not an error.

use std::path::{Path, PathBuf};

use super::env::Environment;
use super::migrate::{self, MigrateOutcome};
use super::raw::RawConfig;
use super::record::ConfigRecord;
use super::schema::{ConfigKey, Schema};
use super::{legacy, security, structured};
use crate::error::{ConfigError, ParseError};
use crate::git::{GitLocator, ProjectLocator};

/// File name of the project-level config at the project root.
pub const PROJECT_CONFIG_FILE: &str = ".mxt";

/// Default `worktree_dir`, relative to the home directory.
pub const DEFAULT_WORKTREE_SUBDIR: &str = "worktrees";

pub const DEFAULT_TERMINAL: &str = "terminal";

/// How config files are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatMode {
    /// TOML, falling back to the legacy syntax for files not yet migrated.
    #[default]
    Auto,
    /// Legacy `key=value` syntax only.
    Legacy,
}

/// Syntax a file was read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FileFormat {
    Toml,
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    User,
    Project,
}

/// A config file that contributed to a resolved config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub format: FileFormat,
    pub values: RawConfig,
}

/// A resolved config plus the files it came from, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub config: ConfigRecord,
    pub sources: Vec<ConfigSource>,
}

/// Built-in defaults: `<home>/worktrees`, the default terminal, all else empty.
pub fn defaults(env: &Environment) -> Result<RawConfig, ConfigError> {
    let worktree_dir = env.home()?.join(DEFAULT_WORKTREE_SUBDIR);
    Ok(RawConfig::from_iter([
        (
            ConfigKey::WorktreeDir,
            worktree_dir.to_string_lossy().into_owned(),
        ),
        (ConfigKey::Terminal, DEFAULT_TERMINAL.to_string()),
        (ConfigKey::SandboxTool, String::new()),
        (ConfigKey::CopyFiles, String::new()),
        (ConfigKey::PreSessionCmd, String::new()),
        (ConfigKey::TmuxLayout, String::new()),
    ]))
}

/// Expand a leading `~` or `~/` against `home`. Anything else is returned unchanged.
pub fn expand_tilde(path: &str, home: &Path) -> String {
    let home = home.to_string_lossy();
    let home: &str = &home;
    shellexpand::tilde_with_context(path, || Some(home)).into_owned()
}

/// Parse file content and validate it.
pub fn parse_content(
    path: &Path,
    content: &str,
    mode: FormatMode,
    schema: &Schema,
) -> Result<(RawConfig, FileFormat), ConfigError> {
    let (config, format) = match mode {
        FormatMode::Legacy => {
            let config = legacy::parse(content, schema).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            (config, FileFormat::Legacy)
        }
        FormatMode::Auto => match structured::parse(content, schema) {
            Ok(config) => (config, FileFormat::Toml),
            // Valid TOML that breaks the schema is a TOML file with an error,
            // not legacy text.
            Err(source) if !matches!(source, ParseError::InvalidStructured { .. }) => {
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(structured) => match legacy::parse(content, schema) {
                Ok(config) => {
                    log::warn!(
                        "{} uses the legacy config format; run `mxt config migrate` to convert it",
                        path.display()
                    );
                    (config, FileFormat::Legacy)
                }
                Err(legacy) => {
                    return Err(ConfigError::Unparseable {
                        path: path.to_path_buf(),
                        structured,
                        legacy,
                    });
                }
            },
        },
    };

    security::validate_all(schema, &config).map_err(|source| ConfigError::Security {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((config, format))
}

/// Read and parse a config file. `Ok(None)` if it doesn't exist.
pub fn read_file(
    path: &Path,
    mode: FormatMode,
    schema: &Schema,
) -> Result<Option<(RawConfig, FileFormat)>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let (config, format) = parse_content(path, &content, mode, schema)?;
    log::debug!(
        "Loaded {} key(s) from {} ({format})",
        config.len(),
        path.display()
    );
    Ok(Some((config, format)))
}

/// Load a config file, treating a missing file as an empty mapping.
pub fn load_file(path: &Path, mode: FormatMode, schema: &Schema) -> Result<RawConfig, ConfigError> {
    Ok(read_file(path, mode, schema)?
        .map(|(config, _)| config)
        .unwrap_or_default())
}

/// Resolves config for a working directory.
///
/// ```no_run
/// use muxtree::config::ConfigLoader;
///
/// let config = ConfigLoader::from_process().resolve(std::path::Path::new("."))?;
/// println!("worktrees go to {}", config.worktree_dir);
/// # Ok::<(), muxtree::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader<L = GitLocator> {
    env: Environment,
    locator: L,
    mode: FormatMode,
    schema: Schema,
}

impl ConfigLoader<GitLocator> {
    /// Loader for the real process: environment variables and git.
    pub fn from_process() -> Self {
        Self::new(Environment::from_process(), GitLocator)
    }
}

impl<L: ProjectLocator> ConfigLoader<L> {
    pub fn new(env: Environment, locator: L) -> Self {
        Self {
            env,
            locator,
            mode: FormatMode::default(),
            schema: Schema::CURRENT,
        }
    }

    pub fn with_mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn user_config_path(&self) -> Result<PathBuf, ConfigError> {
        self.env.user_config_path()
    }

    /// `<project root>/.mxt`, or `None` outside a project.
    pub fn project_config_path(&self, work_dir: &Path) -> Option<PathBuf> {
        let root = self.locator.project_root(work_dir);
        if root.is_none() {
            log::debug!(
                "{} is not inside a project; skipping project config",
                work_dir.display()
            );
        }
        root.map(|root| root.join(PROJECT_CONFIG_FILE))
    }

    pub fn resolve(&self, work_dir: &Path) -> Result<ConfigRecord, ConfigError> {
        self.resolve_with_sources(work_dir)
            .map(|resolved| resolved.config)
    }

    pub fn resolve_with_sources(&self, work_dir: &Path) -> Result<Resolved, ConfigError> {
        let home = self.env.home()?;
        let mut merged = defaults(&self.env)?;
        let mut sources = Vec::new();

        let mut layers = vec![(SourceKind::User, self.user_config_path()?)];
        if let Some(path) = self.project_config_path(work_dir) {
            layers.push((SourceKind::Project, path));
        }

        for (kind, path) in layers {
            let Some((values, format)) = read_file(&path, self.mode, &self.schema)? else {
                continue;
            };
            merged = merged.merge(&values);
            sources.push(ConfigSource {
                kind,
                path,
                format,
                values,
            });
        }

        if let Some(worktree_dir) = merged.get(ConfigKey::WorktreeDir) {
            let expanded = expand_tilde(worktree_dir, home);
            merged.insert(ConfigKey::WorktreeDir, expanded);
        }

        Ok(Resolved {
            config: ConfigRecord::from_raw(&merged),
            sources,
        })
    }

    /// Migrate the user config, then the project config if inside a project.
    pub fn migrate_all(
        &self,
        work_dir: &Path,
    ) -> Result<Vec<(PathBuf, MigrateOutcome)>, ConfigError> {
        let mut paths = vec![self.user_config_path()?];
        paths.extend(self.project_config_path(work_dir));

        paths
            .into_iter()
            .map(|path| {
                let outcome = migrate::migrate_with(&path, &self.schema)?;
                Ok((path, outcome))
            })
            .collect()
    }
}
