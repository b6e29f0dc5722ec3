//! Shared types and constants for the arcade hub.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the piece catalog, the router and the shell alike.
//!
//! # Board Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 10 | Playfield columns (indexed 0-9) |
//! | `GRID_HEIGHT` | 20 | Playfield rows (indexed 0-19) |
//! | `CELL_SIZE` | 30 | Pixel size of one cell |
//! | `EMPTY_CELL` | 0 | Sentinel for an unoccupied cell |
//!
//! # Cell Values
//!
//! A cell holds `0` when empty and `1..=7` for the tetromino occupying it:
//!
//! | Value | Piece |
//! |-------|-------|
//! | 1 | I |
//! | 2 | O |
//! | 3 | T |
//! | 4 | S |
//! | 5 | Z |
//! | 6 | J |
//! | 7 | L |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{PieceKind, RouteName, EMPTY_CELL, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.cell_value(), 3);
//! assert_ne!(piece.cell_value(), EMPTY_CELL);
//!
//! assert_eq!(RouteName::from_str("tetris"), Some(RouteName::Tetris));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Pixel size of a single board cell
pub const CELL_SIZE: u16 = 30;

/// Value of an unoccupied cell
pub const EMPTY_CELL: CellValue = 0;

/// Highest cell value a tetromino can write into a grid
pub const MAX_CELL_VALUE: CellValue = 7;

/// A cell in an occupancy grid: `EMPTY_CELL` or a piece's cell value.
pub type CellValue = u8;

/// Returns true if `value` belongs to the closed set `0..=7`.
pub fn is_valid_cell(value: CellValue) -> bool {
    value <= MAX_CELL_VALUE
}


/// The seven tetromino piece kinds
///
/// Each piece has a fixed cell value and colour:
/// - **I**: cyan, horizontal bar
/// - **O**: yellow, 2x2 square
/// - **T**: purple, T-shaped
/// - **S**: green, S-shaped
/// - **Z**: red, Z-shaped (mirror of S)
/// - **J**: blue, J-shaped
/// - **L**: orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in cell-value order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter identifying the piece
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Value this piece writes into an occupancy grid (1..=7)
    pub fn cell_value(&self) -> CellValue {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_value`]; `None` for `EMPTY_CELL` or out-of-range values.
    pub fn from_cell_value(value: CellValue) -> Option<Self> {
        match value {
            1..=MAX_CELL_VALUE => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// Named routes of the hub
///
/// `Home` is the landing view; the rest are games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Snake,
    Memory,
    TicTacToe,
    Tetris,
}

impl RouteName {
    pub const ALL: [RouteName; 5] = [
        RouteName::Home,
        RouteName::Snake,
        RouteName::Memory,
        RouteName::TicTacToe,
        RouteName::Tetris,
    ];

    /// Parse a route name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(RouteName::Home),
            "snake" => Some(RouteName::Snake),
            "memory" => Some(RouteName::Memory),
            "tictactoe" => Some(RouteName::TicTacToe),
            "tetris" => Some(RouteName::Tetris),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Snake => "snake",
            RouteName::Memory => "memory",
            RouteName::TicTacToe => "tictactoe",
            RouteName::Tetris => "tetris",
        }
    }

    /// Route path relative to the router base.
    pub fn path(&self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::Snake => "/game/snake",
            RouteName::Memory => "/game/memory",
            RouteName::TicTacToe => "/game/tictactoe",
            RouteName::Tetris => "/game/tetris",
        }
    }

    /// True for every route except home.
    pub fn is_game(&self) -> bool {
        !matches!(self, RouteName::Home)
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
