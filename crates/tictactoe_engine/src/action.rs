//! Move records and the invalid-move error.

use super::{Player, Position};
use derive_more::{Display, Error};
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// The engine records one `Move` per accepted turn; the history is what
/// the invariants replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won or drawn.
    #[display("game is already over")]
    GameOver,

    /// The coordinates are not on the 3x3 board.
    #[display("({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

/// A rejected move.
///
/// Recoverable: the engine leaves its state untouched when it returns
/// this error.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMove {
    /// Why the move was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new invalid-move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the rejection reason.
    pub fn kind(&self) -> InvalidMoveKind {
        self.kind
    }
}

impl From<InvalidMoveKind> for InvalidMove {
    #[track_caller]
    fn from(kind: InvalidMoveKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::Center);
        assert_eq!(mov.to_string(), "O -> Center");
    }

    #[test]
    fn test_error_message_names_reason() {
        let err = InvalidMove::new(InvalidMoveKind::SquareOccupied(Position::TopRight));
        let msg = err.to_string();
        assert!(msg.contains("Top-right is already occupied"), "{msg}");
        assert!(msg.contains("action.rs"), "{msg}");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = InvalidMove::from(InvalidMoveKind::OutOfBounds { row: 3, column: 1 });
        assert_eq!(err.kind(), InvalidMoveKind::OutOfBounds { row: 3, column: 1 });
        assert!(err.to_string().contains("(3, 1) is off the board"));
    }
}
