//! timetravel - tic-tac-toe with move history in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tui::{
    Cli, Command, TuiConfig, init_stderr_logging, parse_moves, render, replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref()).context("Failed to load config")?;
            run_tui(&config)
        }
        Command::Replay { moves, jump, format } => {
            init_stderr_logging("warn");
            let moves = parse_moves(&moves)?;
            info!(count = moves.len(), ?jump, "Replaying moves");
            let game = replay(&moves, jump);
            println!("{}", render(&game, format)?);
            Ok(())
        }
    }
}
