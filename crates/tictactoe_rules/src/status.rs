//! Game status.

use crate::mark::Mark;
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// `Won` and `Draw` are terminal: only a reset leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Message shown to players once the game has ended.
    pub fn outcome_message(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(format!("Winner: Player {mark}")),
            GameStatus::Draw => Some("It's a draw!".to_string()),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "Won by {mark}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Mark::X).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(GameStatus::InProgress.outcome_message(), None);
        assert_eq!(
            GameStatus::Won(Mark::O).outcome_message().as_deref(),
            Some("Winner: Player O")
        );
        assert_eq!(
            GameStatus::Draw.outcome_message().as_deref(),
            Some("It's a draw!")
        );
    }
}
