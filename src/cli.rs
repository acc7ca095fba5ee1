use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

/// Help output styles, matching the message colors
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Text,
    /// JSON output
    Json,
}

#[derive(Parser)]
#[command(name = "mxt")]
#[command(about = "Git worktree + tmux session manager", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Change working directory
    #[arg(short = 'C', global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Show debug output (external commands, config sources)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read config files in the legacy key=value syntax only
    #[arg(long, global = true)]
    pub legacy: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and maintain configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show config files and the resolved values
    Show,

    /// Convert legacy key=value config files to TOML
    ///
    /// Migrates the user config and, inside a project, the project config.
    /// Files that are already TOML are left alone.
    Migrate,

    /// Show the windows a new session would get
    Layout {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Command for the agent window of the default layout
        #[arg(long, value_name = "command", default_value = "")]
        run: String,
    },
}
