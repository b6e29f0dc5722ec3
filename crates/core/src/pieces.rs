//! Pieces module - the tetromino catalog
//!
//! Each of the seven pieces is stored in its spawn orientation as a square
//! occupancy grid (4x4 for I, 2x2 for O, 3x3 for the rest). Nonzero cells
//! carry the piece's cell value so a grid can be stamped straight onto a board.
//! Other rotation states are derived on demand with [`ShapeGrid::rotated_cw`].

use arrayvec::ArrayVec;

use crate::types::{CellValue, PieceKind, EMPTY_CELL};

/// Largest side length of any catalog grid (the I piece)
pub const MAX_GRID_SIZE: usize = 4;

/// Number of occupied cells in every tetromino
pub const MINO_COUNT: usize = 4;

/// Square occupancy grid of side `size`, stored padded to 4x4.
///
/// Cells outside `size` are always `EMPTY_CELL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    size: u8,
    cells: [[CellValue; MAX_GRID_SIZE]; MAX_GRID_SIZE],
}

impl ShapeGrid {
    const fn new(size: u8, cells: [[CellValue; MAX_GRID_SIZE]; MAX_GRID_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell at column `x`, row `y`; `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<CellValue> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Rows top to bottom, each `size` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        let size = self.size();
        self.cells[..size].iter().map(move |row| &row[..size])
    }

    /// Occupied `(x, y)` positions in row-major order
    pub fn occupied(&self) -> ArrayVec<(u8, u8), 16> {
        let mut out = ArrayVec::new();
        for (y, row) in self.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != EMPTY_CELL {
                    out.push((x as u8, y as u8));
                }
            }
        }
        out
    }

    pub fn occupied_count(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&c| c != EMPTY_CELL).count())
            .sum()
    }

    /// Rotate the grid 90 degrees clockwise about its centre.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[EMPTY_CELL; MAX_GRID_SIZE]; MAX_GRID_SIZE];
        for (y, row) in cells.iter_mut().take(n).enumerate() {
            for (x, cell) in row.iter_mut().take(n).enumerate() {
                *cell = self.cells[n - 1 - x][y];
            }
        }
        Self::new(self.size, cells)
    }

    /// Rotate the grid 90 degrees counter-clockwise about its centre.
    pub fn rotated_ccw(&self) -> Self {
        let n = self.size();
        let mut cells = [[EMPTY_CELL; MAX_GRID_SIZE]; MAX_GRID_SIZE];
        for (y, row) in cells.iter_mut().take(n).enumerate() {
            for (x, cell) in row.iter_mut().take(n).enumerate() {
                *cell = self.cells[x][n - 1 - y];
            }
        }
        Self::new(self.size, cells)
    }
}

/// A catalog entry: spawn shape plus display colour class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub color: &'static str,
}

static TETROMINOS: [Tetromino; 7] = [
    Tetromino {
        kind: PieceKind::I,
        shape: ShapeGrid::new(
            4,
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-cyan-500",
    },
    Tetromino {
        kind: PieceKind::O,
        shape: ShapeGrid::new(
            2,
            [[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-yellow-500",
    },
    Tetromino {
        kind: PieceKind::T,
        shape: ShapeGrid::new(
            3,
            [[0, 3, 0, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-purple-500",
    },
    Tetromino {
        kind: PieceKind::S,
        shape: ShapeGrid::new(
            3,
            [[0, 4, 4, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-green-500",
    },
    Tetromino {
        kind: PieceKind::Z,
        shape: ShapeGrid::new(
            3,
            [[5, 5, 0, 0], [0, 5, 5, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-red-500",
    },
    Tetromino {
        kind: PieceKind::J,
        shape: ShapeGrid::new(
            3,
            [[6, 0, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-blue-500",
    },
    Tetromino {
        kind: PieceKind::L,
        shape: ShapeGrid::new(
            3,
            [[0, 0, 7, 0], [7, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        color: "bg-orange-500",
    },
];

/// Look up a piece in the catalog.
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    // Table order matches cell values 1..=7.
    &TETROMINOS[(kind.cell_value() - 1) as usize]
}

/// All seven pieces in cell-value order
pub fn catalog() -> &'static [Tetromino; 7] {
    &TETROMINOS
}

/// Spawn shape for a piece kind
pub fn get_spawn_shape(kind: PieceKind) -> ShapeGrid {
    tetromino(kind).shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_cell_value() {
        for kind in PieceKind::ALL {
            assert_eq!(tetromino(kind).kind, kind);
        }
    }

    #[test]
    fn padding_outside_size_stays_empty() {
        for piece in catalog() {
            let n = piece.shape.size();
            for y in 0..MAX_GRID_SIZE {
                for x in 0..MAX_GRID_SIZE {
                    if x >= n || y >= n {
                        assert_eq!(piece.shape.cells[y][x], EMPTY_CELL, "{:?}", piece.kind);
                    }
                }
            }
        }
    }

    #[test]
    fn get_rejects_positions_outside_grid() {
        let o = tetromino(PieceKind::O).shape;
        assert_eq!(o.get(1, 1), Some(2));
        assert_eq!(o.get(2, 0), None);
        assert_eq!(o.get(0, 2), None);
    }

    #[test]
    fn ccw_undoes_cw() {
        for piece in catalog() {
            assert_eq!(piece.shape.rotated_cw().rotated_ccw(), piece.shape);
        }
    }
}
