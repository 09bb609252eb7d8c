//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::GameEngine;

/// Invariant: History length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
