//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_rules::Position;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a digit key to the position with that number.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(Position::from_number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_do_not_move() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_position(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_position(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_position(KeyCode::Char('0')), None);
        assert_eq!(digit_position(KeyCode::Char('x')), None);
        assert_eq!(digit_position(KeyCode::Enter), None);
    }
}
