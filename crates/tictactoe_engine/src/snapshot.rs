//! Read-only, serializable view of a game.

use crate::engine::GameEngine;
use crate::position::Position;
use crate::rules::WinningLine;
use crate::types::{Cell, GameStatus, Player};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything a caller needs to render one frame of the game.
///
/// Detached from the engine: holding a snapshot never blocks a move, and
/// a snapshot cannot be used to change the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Board rows, top to bottom.
    board: [[Cell; 3]; 3],
    /// Player whose mark the next move places (frozen once over).
    #[getter(copy)]
    current_player: Player,
    /// Turn indicator: the current player while in progress, else `None`.
    #[getter(copy)]
    turn: Option<Player>,
    /// Derived game status.
    #[getter(copy)]
    status: GameStatus,
    /// Completed line, present only when won.
    #[getter(copy)]
    winning_line: Option<WinningLine>,
    /// Accepted moves, oldest first.
    moves: Vec<Position>,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().rows(),
            current_player: engine.current_player(),
            turn: engine.turn(),
            status: engine.status(),
            winning_line: engine.winning_line(),
            moves: engine.history().iter().map(|mov| mov.position).collect(),
        }
    }
}
