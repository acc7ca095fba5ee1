use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use muxtree::config::{ConfigLoader, FormatMode};
use muxtree::styling::error_message;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommand};

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn work_dir(directory: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match directory {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let work_dir = work_dir(cli.directory)?;
    let mode = if cli.legacy {
        FormatMode::Legacy
    } else {
        FormatMode::Auto
    };
    let loader = ConfigLoader::from_process().with_mode(mode);

    match cli.command {
        Commands::Config(ConfigCommand::Show) => commands::handle_config_show(&loader, &work_dir),
        Commands::Config(ConfigCommand::Migrate) => {
            commands::handle_config_migrate(&loader, &work_dir)
        }
        Commands::Config(ConfigCommand::Layout { format, run }) => {
            commands::handle_config_layout(&loader, &work_dir, format, &run)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", error_message(e.to_string()));
        process::exit(1);
    }
}
