//! Core data for the arcade hub - pure and testable
//!
//! This crate holds the Tetris data model consumed by the game views. It has
//! **no dependencies** on the router, persistence, or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino shapes in spawn orientation, with colour classes
//! - [`board`]: 10x20 playfield grid initialised to the empty sentinel
//!
//! Gravity, collision, line clearing and scoring are not part of this crate.
//! Rotation is derived at runtime from the spawn grids.
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{tetromino, Board};
//! use tui_arcade_types::PieceKind;
//!
//! let t = tetromino(PieceKind::T);
//! assert_eq!(t.color, "bg-purple-500");
//! assert_eq!(t.shape.occupied_count(), 4);
//!
//! let board = Board::new();
//! assert_eq!(board.cells().len(), 200);
//! assert_eq!(board.pixel_size(), (300, 600));
//! ```

pub mod board;
pub mod pieces;

pub use tui_arcade_types as types;

pub use board::Board;
pub use pieces::{catalog, get_spawn_shape, tetromino, ShapeGrid, Tetromino};
