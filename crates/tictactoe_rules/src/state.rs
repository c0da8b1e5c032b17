//! The game state machine.

use crate::action::{Move, MoveOutcome, Rejection};
use crate::board::Board;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::mark::{Cell, Mark};
use crate::position::{InvalidPosition, Position};
use crate::rules::{self, Line};
use crate::status::GameStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// The only mutator of its board. A fresh value (or one that was just
/// [`reset`](Self::reset)) has an empty board, X to move and status
/// [`GameStatus::InProgress`].
///
/// Deserializing checks the board, history, turn and status against each
/// other, so a stored game can only come back as a reachable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateSnapshot")]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: GameStatus,
    history: Vec<Move>,
    winning_line: Option<Line>,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// The player whose turn it is.
    ///
    /// Once the game has ended this stays on the player who made the last move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the cell at the given position.
    pub fn cell_at(&self, position: Position) -> Cell {
        self.board.get(position)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of marks placed so far (0-9).
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The line that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Positions that would be accepted right now.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// A move after the game has ended, or onto an occupied cell, is
    /// rejected and leaves every part of the state untouched. Otherwise the
    /// mark is placed, all eight lines are re-checked, and the turn passes
    /// to the opponent unless the move ended the game.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Move rejected: game is over");
            return MoveOutcome::Rejected(Rejection::GameOver(self.status));
        }

        if !self.board.is_empty(position) {
            debug!("Move rejected: cell is occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(position));
        }

        let placed = Move::new(self.current_player, position);
        self.board.set(position, Cell::Marked(placed.mark));
        self.history.push(placed);

        if let Some((mark, line)) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(mark);
            self.winning_line = Some(line);
            info!(winner = %mark, moves = self.history.len(), "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current_player = placed.mark.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after {placed}"
        );

        debug!(%placed, status = %self.status, "Move accepted");
        MoveOutcome::Accepted {
            placed,
            status: self.status,
        }
    }

    /// Places the current player's mark at a raw position number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `number` is outside 1..9; the game is
    /// not touched in that case.
    #[instrument(skip(self))]
    pub fn apply_number(&mut self, number: u8) -> Result<MoveOutcome, InvalidPosition> {
        let position = Position::try_from(number)?;
        Ok(self.apply_move(position))
    }

    /// Restores the starting state.
    #[instrument(skip(self), fields(moves = self.history.len(), status = %self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked field-for-field form of [`GameState`] as it is stored.
#[derive(Deserialize)]
struct GameStateSnapshot {
    board: Board,
    current_player: Mark,
    status: GameStatus,
    history: Vec<Move>,
    winning_line: Option<Line>,
}

/// A stored game that no sequence of moves could have produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent game state: {}", describe(violations))]
pub struct InvalidGameState {
    /// Every invariant the stored game breaks.
    pub violations: Vec<InvariantViolation>,
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl TryFrom<GameStateSnapshot> for GameState {
    type Error = InvalidGameState;

    fn try_from(snapshot: GameStateSnapshot) -> Result<Self, Self::Error> {
        let game = Self {
            board: snapshot.board,
            current_player: snapshot.current_player,
            status: snapshot.status,
            history: snapshot.history,
            winning_line: snapshot.winning_line,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            debug!(count = violations.len(), "Stored game rejected");
            InvalidGameState { violations }
        })?;
        Ok(game)
    }
}
