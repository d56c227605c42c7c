//! Command-line interface for timetravel.

use crate::replay::ReplayFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file. Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Comma-separated cell indices (0-8) or labels, e.g. "0,4,8"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Step to view after replaying (0 = game start)
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}
