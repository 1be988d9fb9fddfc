//! Tic-tac-toe for the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_duel::cli::Cli;
use tictactoe_duel::tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output does not fight the terminal UI
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(mode = ?cli.mode, seed = ?cli.seed, "starting tictactoe_duel");

    tui::run(cli.mode.map(Into::into), cli.seed).await
}
