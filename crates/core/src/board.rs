//! Board module - the playfield grid a game view owns
//!
//! The board is a 10x20 grid of cell values stored in a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! A new board is entirely `EMPTY_CELL`.

use crate::types::{is_valid_cell, CellValue, CELL_SIZE, EMPTY_CELL, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellValue; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Rendered size in pixels: (width * CELL_SIZE, height * CELL_SIZE)
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            GRID_WIDTH as u32 * CELL_SIZE as u32,
            GRID_HEIGHT as u32 * CELL_SIZE as u32,
        )
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellValue> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or the value is not a valid cell value
    pub fn set(&mut self, x: i8, y: i8, value: CellValue) -> bool {
        if !is_valid_cell(value) {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY_CELL)
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        assert!(board.set(0, 0, 1));
        assert!(board.set(5, 10, 3));

        assert_eq!(board.get(0, 0), Some(1));
        assert_eq!(board.get(5, 10), Some(3));

        assert_eq!(board.cells[0], 1);
        assert_eq!(board.cells[10 * 10 + 5], 3);
    }

    #[test]
    fn test_rows_are_board_width() {
        let board = Board::new();
        let rows: Vec<&[CellValue]> = board.rows().collect();
        assert_eq!(rows.len(), GRID_HEIGHT as usize);
        assert!(rows.iter().all(|r| r.len() == GRID_WIDTH as usize));
    }
}
