//! Terminal front end for the tic-tac-toe engine.
//!
//! The engine knows nothing about terminals; this crate is its caller.
//! It parses commands, feeds moves to one [`tictactoe_engine::GameEngine`],
//! and renders the board, turn, and result as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod render;
mod session;
mod settings;

pub use cli::{Cli, Command};
pub use render::{render, render_board, snapshot_json, snapshot_schema};
pub use session::{CommandError, PlaySession, Reply, SessionCommand, replay};
pub use settings::{ConfigError, Settings};
