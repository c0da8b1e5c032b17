//! The 3x3 grid.

use crate::mark::{Cell, Mark};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    ///
    /// Only the game state writes to the board; everything else reads.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.filled() == self.cells.len()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        [
            [self.cells[0], self.cells[1], self.cells[2]],
            [self.cells[3], self.cells[4], self.cells[5]],
            [self.cells[6], self.cells[7], self.cells[8]],
        ]
    }
}

impl std::fmt::Display for Board {
    /// Renders marks, with empty cells showing their position number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}
