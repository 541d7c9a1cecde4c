//! Board structure: a fixed 15x15 grid of cells

use std::fmt;

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GameError, SnapshotError};

/// Game board
///
/// Cells are stored row-major, so iterating indices visits `y` rows top to
/// bottom and `x` columns left to right within each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    /// Get the cell at `(x, y)`
    pub fn get(&self, x: i32, y: i32) -> Result<Stone, GameError> {
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        Ok(self.at(pos))
    }

    /// Overwrite the cell at `(x, y)`. Legality is the rules' concern, not ours.
    pub fn set(&mut self, x: i32, y: i32, stone: Stone) -> Result<(), GameError> {
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        self.put(pos, stone);
        Ok(())
    }

    /// Get stone at an already validated position
    #[inline]
    pub fn at(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Write stone at an already validated position
    #[inline]
    pub fn put(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.at(pos) == Stone::Empty
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Number of cells holding `stone`
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Total non-empty cells (stones and obstacles)
    pub fn stone_count(&self) -> usize {
        TOTAL_CELLS - self.count(Stone::Empty)
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Row-major integer grid, `rows[y][x]`
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }

    /// Rebuild a board from the grid produced by [`Board::to_rows`]
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, SnapshotError> {
        if rows.len() != BOARD_SIZE {
            return Err(SnapshotError::new(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(SnapshotError::new(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            for (x, &code) in row.iter().enumerate() {
                let stone = Stone::from_code(code).ok_or_else(|| {
                    SnapshotError::new(format!("unknown cell code {} at ({}, {})", code, x, y))
                })?;
                board.put(Pos::new(x as u8, y as u8), stone);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{:2}", x)?;
        }
        writeln!(f)?;

        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            write!(f, "{:2} ", y)?;
            for stone in row {
                let ch = match stone {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Blocked => " #",
                    Stone::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
