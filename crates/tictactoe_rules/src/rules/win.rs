//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::mark::{Cell, Mark};
use crate::position::Position;
use tracing::instrument;

/// Three positions that win when they hold the same mark.
pub type Line = [Position; 3];

/// Every winning line, in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks every line on the board for three identical marks.
///
/// Returns the winning mark and the first line (in [`LINES`] order) that
/// completes it, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Cell::Marked(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Marked(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            assert_eq!(check_winner(&board), Some((Mark::O, line)), "line {line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Marked(Mark::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board), Some((Mark::X, LINES[0])));
    }
}
