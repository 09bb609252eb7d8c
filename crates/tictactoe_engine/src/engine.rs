//! The game engine: board, turn, and derived status.

use crate::action::{InvalidMove, InvalidMoveKind, Move};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, Cell, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, whose turn it is, and the derived status. The only
/// mutations are [`GameEngine::apply_move`] (or its typed twin
/// [`GameEngine::place`]) and [`GameEngine::reset`]; everything else is a
/// read-only view for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `moves` in order from a fresh board.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidMove`] encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, InvalidMove> {
        let mut engine = Self::new();
        for pos in moves {
            engine.place(*pos)?;
        }
        Ok(engine)
    }

    /// Places the current player's mark at (row, column).
    ///
    /// Returns the status after the move. The turn passes to the other
    /// player only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching any state when the
    /// coordinates are off the board, the cell is occupied, or the game is
    /// already over.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<GameStatus, InvalidMove> {
        match Position::from_row_column(row, column) {
            Some(pos) => self.place(pos),
            None => {
                warn!(row, column, "Move rejected: off the board");
                Err(InvalidMove::new(InvalidMoveKind::OutOfBounds { row, column }))
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the bounds case.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, InvalidMove> {
        let mov = Move::new(self.current_player, pos);
        if let Err(err) = MoveContract::pre(self, &mov) {
            warn!(kind = %err.kind(), "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Cell::Occupied(mov.player));
        self.history.push(mov);
        self.status = rules::evaluate(&self.board);
        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            if let Err(violations) = &checked {
                tracing::error!(?violations, "Move broke a game invariant");
            }
            debug_assert!(checked.is_ok(), "move broke a game invariant");
        }

        match self.status {
            GameStatus::InProgress => debug!(%mov, next = %self.current_player, "Move applied"),
            GameStatus::Won { winner, line } => {
                info!(%winner, line = ?line.coordinates(), "Game won")
            }
            GameStatus::Draw => info!("Game drawn"),
        }
        Ok(self.status)
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// Frozen once the game is over: after a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whose turn it is, or `None` once the game is won or drawn.
    pub fn turn(&self) -> Option<Player> {
        (!self.status.is_over()).then_some(self.current_player)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, present only when the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions the current player may still play; empty once over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Captures a read-only, serializable view of the game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
