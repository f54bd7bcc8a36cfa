//! Hangman Rescue - CLI
//!
//! Terminal hangman with a TUI and a plain CLI mode. Sessions resume after
//! an interrupted game and statistics persist across sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_rescue::{
    commands::{run_reset_stats, run_simple, run_stats},
    store::default_data_dir,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_rescue",
    about = "Terminal hangman with session resume and lifetime statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved sessions, statistics, and preferences
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Show lifetime statistics
    Stats,

    /// Reset lifetime statistics to zero
    ResetStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir().context("Could not determine a data directory")?,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal; only log outside of it
    if !matches!(command, Commands::Play) {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match command {
        Commands::Play => run_play_command(&data_dir),
        Commands::Simple => run_simple(&data_dir).map_err(|e| anyhow::anyhow!(e)),
        Commands::Stats => Ok(run_stats(&data_dir)?),
        Commands::ResetStats => Ok(run_reset_stats(&data_dir)?),
    }
}

fn run_play_command(data_dir: &std::path::Path) -> Result<()> {
    use hangman_rescue::interactive::{App, run_tui};

    let app = App::new(data_dir)?;
    run_tui(app)
}
