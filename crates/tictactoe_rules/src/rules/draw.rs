//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
