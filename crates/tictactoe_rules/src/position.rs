//! Logical board positions numbered 1..9 in row-major order.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Positions are numbered 1..9 reading left to right, top to bottom:
///
/// ```text
/// 1|2|3
/// -+-+-
/// 4|5|6
/// -+-+-
/// 7|8|9
/// ```
///
/// Collaborators only ever see this logical numbering; the flat storage
/// index is private to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

/// A raw position number outside 1..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid position {value}: must be between 1 and 9")]
pub struct InvalidPosition {
    /// The rejected number.
    pub value: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Flat storage index (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Logical position number (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Looks up a position by its logical number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Row (0-2), counted from the top.
    pub fn row(self) -> u8 {
        (self.number() - 1) / 3
    }

    /// Column (0-2), counted from the left.
    pub fn col(self) -> u8 {
        (self.number() - 1) % 3
    }

    /// Looks up a position by row and column.
    #[instrument]
    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_number(row * 3 + col + 1)
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(InvalidPosition { value })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}
