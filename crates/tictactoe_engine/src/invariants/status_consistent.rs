//! Status consistency invariant: the status is always the board's verdict.

use super::Invariant;
use crate::{GameEngine, rules};

/// Invariant: Status equals what the rules derive from the board.
///
/// `GameStatus::Won` carries its line, so this also checks that the
/// line is the one actually completed on the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        rules::evaluate(game.board()) == game.status()
    }

    fn description() -> &'static str {
        "Status matches what the rules derive from the board"
    }
}
