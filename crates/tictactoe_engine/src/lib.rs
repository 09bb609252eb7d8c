//! Tic-tac-toe game engine.
//!
//! A pure, synchronous state machine over a 3x3 board. The engine owns the
//! board and whose turn it is, validates each move, and derives the game
//! status (in progress, won with a line, or drawn) after every move. It
//! has no I/O and no UI dependency: callers render from the read-only
//! accessors or a [`GameSnapshot`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut game = GameEngine::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.apply_move(row, column)?;
//! }
//! let status = game.apply_move(0, 2)?;
//! assert_eq!(status.winner(), Some(Player::X));
//! assert!(game.apply_move(2, 2).is_err());
//!
//! game.reset();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{InvalidMove, InvalidMoveKind, Move};
pub use contracts::{Contract, GameInProgress, MoveContract, SquareIsEmpty};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::WinningLine;
pub use snapshot::GameSnapshot;
pub use types::{Board, Cell, GameStatus, Player};
