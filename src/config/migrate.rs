//! Rewrite legacy `key=value` config files as TOML.

use std::path::Path;

use super::schema::Schema;
use super::{legacy, structured};
use crate::error::{ConfigError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// No file at the path.
    Missing,
    /// The file already parses as TOML; left untouched.
    AlreadyToml,
    /// The file was legacy syntax and has been rewritten as TOML.
    Migrated,
}

impl MigrateOutcome {
    pub fn migrated(self) -> bool {
        self == MigrateOutcome::Migrated
    }
}

/// Migrate a file with the current schema. Returns whether it was rewritten.
pub fn migrate(path: &Path) -> Result<bool, ConfigError> {
    migrate_with(path, &Schema::CURRENT).map(MigrateOutcome::migrated)
}

/// Migrate a file in place, keeping its permission bits.
///
/// A file that parses under neither syntax is left untouched and the
/// error returned.
pub fn migrate_with(path: &Path, schema: &Schema) -> Result<MigrateOutcome, ConfigError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(MigrateOutcome::Missing),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let structured_err = match structured::parse(&content, schema) {
        Ok(_) => {
            log::debug!("{} is already TOML", path.display());
            return Ok(MigrateOutcome::AlreadyToml);
        }
        Err(e @ ParseError::InvalidStructured { .. }) => e,
        Err(source) => {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = legacy::parse(&content, schema).map_err(|legacy| ConfigError::Unparseable {
        path: path.to_path_buf(),
        structured: structured_err,
        legacy,
    })?;

    let encoded = structured::encode(&config, schema).map_err(|source| ConfigError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(path, encoded).map_err(write_err)?;
    std::fs::set_permissions(path, metadata.permissions()).map_err(write_err)?;

    log::info!("Migrated {} to TOML", path.display());
    Ok(MigrateOutcome::Migrated)
}
