//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: Players alternate turns, starting with X.
///
/// While the game is in progress the current player is the one the
/// alternation predicts. Once it is over the current player stays on
/// whoever made the last move.
pub struct AlternatingTurnInvariant;

fn expected_mover(turn: usize) -> Player {
    if turn % 2 == 0 { Player::X } else { Player::O }
}

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.player == expected_mover(turn));
        if !alternates {
            return false;
        }

        if game.is_over() {
            history
                .last()
                .is_some_and(|last| last.player == game.current_player())
        } else {
            game.current_player() == expected_mover(history.len())
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
