//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about)]
pub struct Cli {
    /// Path to a TOML settings file.
    #[arg(long, global = true, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a two-player game on stdin/stdout.
    Play,

    /// Apply a list of moves and print the result.
    Replay {
        /// Moves in order: `row,column`, a cell number 1-9, or a label.
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of the game snapshot.
    Schema,
}
