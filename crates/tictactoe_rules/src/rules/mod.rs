//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; nothing here mutates. The game state
//! re-checks the board after every accepted move, and [`evaluate`] lets the
//! invariants recompute the status from scratch.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

use crate::board::Board;
use crate::status::GameStatus;
use tracing::instrument;

/// Derives the game status from a board.
///
/// All eight lines are checked first; a full board with no complete line
/// is a draw; anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, _)) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
