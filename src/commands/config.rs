//! `mxt config` subcommands.

use std::fmt::Write as _;
use std::path::Path;

use color_print::cformat;
use muxtree::config::{ConfigLoader, FileFormat, MigrateOutcome, Schema};
use muxtree::git::ProjectLocator;
use muxtree::path::format_path_for_display;
use muxtree::session::SessionConfig;
use muxtree::styling::{
    format_heading, hint_message, info_message, success_message, warning_message,
};

use crate::cli::OutputFormat;

/// Print each contributing config file, then the resolved values.
pub fn handle_config_show<L: ProjectLocator>(
    loader: &ConfigLoader<L>,
    work_dir: &Path,
) -> anyhow::Result<()> {
    let resolved = loader.resolve_with_sources(work_dir)?;
    let mut out = String::new();

    if resolved.sources.is_empty() {
        let user_path = loader.user_config_path()?;
        writeln!(
            out,
            "{}",
            info_message(cformat!(
                "No config files found; using defaults (create <bold>{}</>)",
                format_path_for_display(&user_path)
            ))
        )?;
    }

    for source in &resolved.sources {
        let title = format!("{} CONFIG", source.kind.to_string().to_uppercase());
        let path = format_path_for_display(&source.path);
        writeln!(out, "{}", format_heading(&title, Some(&path)))?;
        for (key, value) in source.values.iter() {
            writeln!(out, "  {key} = {value:?}")?;
        }
        if source.format == FileFormat::Legacy {
            writeln!(
                out,
                "{}",
                hint_message(cformat!(
                    "Legacy syntax; run <bold>mxt config migrate</> to convert to TOML"
                ))
            )?;
        }
        out.push('\n');
    }

    writeln!(out, "{}", format_heading("RESOLVED", None))?;
    for &key in Schema::CURRENT.keys() {
        writeln!(out, "  {key} = {:?}", resolved.config.get(key))?;
    }

    print!("{out}");
    Ok(())
}

/// Migrate the user and project config files to TOML.
pub fn handle_config_migrate<L: ProjectLocator>(
    loader: &ConfigLoader<L>,
    work_dir: &Path,
) -> anyhow::Result<()> {
    let results = loader.migrate_all(work_dir)?;
    let mut any_found = false;

    for (path, outcome) in results {
        let path = format_path_for_display(&path);
        match outcome {
            MigrateOutcome::Missing => continue,
            MigrateOutcome::AlreadyToml => {
                eprintln!("{}", info_message(cformat!("<bold>{path}</> is already TOML")));
            }
            MigrateOutcome::Migrated => {
                eprintln!("{}", success_message(cformat!("Migrated <bold>{path}</> to TOML")));
            }
        }
        any_found = true;
    }

    if !any_found {
        eprintln!(
            "{}",
            warning_message("No legacy config files found to migrate")
        );
    }
    Ok(())
}

/// Print the windows a session created here would get.
pub fn handle_config_layout<L: ProjectLocator>(
    loader: &ConfigLoader<L>,
    work_dir: &Path,
    format: OutputFormat,
    run_command: &str,
) -> anyhow::Result<()> {
    let config = loader.resolve(work_dir)?;
    let session = SessionConfig::new("", work_dir, &config).with_run_command(run_command);
    let windows = session.windows()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&windows)?);
        }
        OutputFormat::Text => {
            for window in &windows {
                let panes = window
                    .panes
                    .iter()
                    .map(|pane| if pane.is_empty() { "(shell)" } else { pane.as_str() })
                    .collect::<Vec<_>>()
                    .join(" | ");
                println!("{}", cformat!("<bold>{}</>: {panes}", window.name));
            }
        }
    }
    Ok(())
}
