//! History consistency: the board is exactly the replay of the move history.

use super::Invariant;
use crate::{Board, Cell, GameState, rules};

/// Invariant: replaying the history onto an empty board, never writing an
/// occupied cell, reproduces the current board.
///
/// This also pins the move count to the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut replayed = Board::new();

        for mov in game.history() {
            if !replayed.is_empty(mov.position) || rules::evaluate(&replayed).is_terminal() {
                return false;
            }
            replayed.set(mov.position, Cell::Marked(mov.mark));
        }

        replayed == *game.board() && game.board().filled() == game.move_count()
    }

    fn description() -> &'static str {
        "Board matches move history (cells never overwritten, no moves after the end)"
    }
}
