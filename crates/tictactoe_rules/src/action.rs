//! Moves and their outcomes.
//!
//! A rejected move is an ordinary result, not an error: the caller asked
//! for something the rules do not allow right now and the game is left
//! exactly as it was.

use crate::mark::Mark;
use crate::position::Position;
use crate::status::GameStatus;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub mark: Mark,
    /// Where the mark went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({_0})")]
    GameOver(GameStatus),
}

/// Result of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed.
    Accepted {
        /// The placement that happened.
        placed: Move,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Checks if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Status after an accepted move, `None` if rejected.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            MoveOutcome::Accepted { status, .. } => Some(*status),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// The rejection reason, `None` if accepted.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted { .. } => None,
            MoveOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}
