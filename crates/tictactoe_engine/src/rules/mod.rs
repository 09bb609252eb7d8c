//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine owns the state; these only
//! look at it, so the same rules back both move evaluation and the
//! invariant checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, find_winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// Lines are tried rows first, then columns, then diagonals; the first
/// complete line decides. With no line and no empty cell the game is a
/// draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_winner(board) {
        return GameStatus::Won { winner, line };
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
