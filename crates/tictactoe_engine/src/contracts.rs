//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts pair the checks a move must pass before it is applied with
//! the properties the engine must still satisfy afterwards: {P} move {Q}.

use super::action::{InvalidMove, InvalidMoveKind, Move};
use super::engine::GameEngine;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::types::Cell;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must not be won or drawn.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves once the game is over.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine) -> Result<(), InvalidMove> {
        if game.is_over() {
            Err(InvalidMove::new(InvalidMoveKind::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), InvalidMove> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(InvalidMove::new(InvalidMoveKind::SquareOccupied(mov.position)))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one new mark, every earlier mark untouched
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), InvalidMove> {
        GameInProgress::check(game)?;
        SquareIsEmpty::check(action, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = TicTacToeInvariants::check_all(after).err().unwrap_or_default();

        let kept = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(was, now)| *was == Cell::Empty || was == now);
        if !kept {
            violations.push(InvariantViolation::new("Earlier marks are never overwritten"));
        }
        if after.board().occupied() != before.board().occupied() + 1 {
            violations.push(InvariantViolation::new("A move places exactly one mark"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameEngine::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameEngine::replay(&[Position::Center]).unwrap();
        let action = Move::new(Player::O, Position::Center);
        let err = MoveContract::pre(&game, &action).unwrap_err();
        assert_eq!(err.kind(), InvalidMoveKind::SquareOccupied(Position::Center));
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let game = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .unwrap();
        // Occupied and over: the game-over reason wins.
        let action = Move::new(Player::X, Position::TopLeft);
        let err = MoveContract::pre(&game, &action).unwrap_err();
        assert_eq!(err.kind(), InvalidMoveKind::GameOver);
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameEngine::new();
        let mut after = before.clone();
        after.place(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = GameEngine::replay(&[Position::Center]).unwrap();
        let mut after = before.clone();
        after.board.set(Position::Center, Cell::Occupied(Player::O));
        after.history.push(Move::new(Player::O, Position::TopLeft));
        after.current_player = Player::X;

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == "Earlier marks are never overwritten")
        );
    }

    #[test]
    fn test_postcondition_detects_missing_mark() {
        let before = GameEngine::new();
        let after = before.clone();
        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("A move places exactly one mark")]);
    }
}
