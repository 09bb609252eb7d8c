//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The three positions of a completed row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Wraps three positions as a line.
    pub fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The line as (row, column) pairs.
    pub fn coordinates(&self) -> [(usize, usize); 3] {
        self.0.map(|pos| (pos.row(), pos.column()))
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player and the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then(|| (player, WinningLine::new([a, b, c])))
    })
}
