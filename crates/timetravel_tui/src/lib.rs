//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Cli**: `play` (interactive) and `replay` (headless) commands
//! - **Config**: TOML settings for the interactive mode
//! - **Tui**: `App` state, key handling and stateless rendering
//! - **Replay**: applies a move list and prints the result

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayError, ReplayFormat, parse_moves, render, replay};
pub use tui::{App, Flow, Focus, run_tui};
