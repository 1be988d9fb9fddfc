//! Command-line interface for tictactoe_duel.

use crate::session::GameMode;
use clap::{Parser, ValueEnum};

/// Tic-tac-toe in the terminal: duel a friend or the bot.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Tic-tac-toe with a heuristic bot and a local duel mode", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the welcome screen and start directly in this mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the bot's tie-breaking randomness (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path (logs are kept out of the terminal UI)
    #[arg(long, default_value = "tictactoe_duel.log")]
    pub log_file: std::path::PathBuf,
}

/// Game mode selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Human against the bot
    Single,
    /// Two local humans
    Duel,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::Single,
            ModeArg::Duel => GameMode::Duel,
        }
    }
}
