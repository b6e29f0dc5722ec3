//! Router module - static route table with lazily loaded game views
//!
//! # Routes
//!
//! | Path | Name | Loading |
//! |------|------|---------|
//! | `/` | home | eager |
//! | `/game/snake` | snake | lazy |
//! | `/game/memory` | memory | lazy |
//! | `/game/tictactoe` | tictactoe | lazy |
//! | `/game/tetris` | tetris | lazy |
//!
//! Every path is prefixed with the table's base path. Navigating to a lazy
//! route runs its loader before the view is mounted; home never waits on a
//! loader.
//!
//! # Example
//!
//! ```
//! use tui_arcade_router::{RouteTable, View};
//! use tui_arcade_types::RouteName;
//!
//! let routes = RouteTable::new("/");
//! let home = routes.navigate("/").unwrap();
//! assert_eq!(home.route(), RouteName::Home);
//! assert!(!routes.is_loaded(RouteName::Tetris));
//!
//! let tetris = routes.navigate("/game/tetris").unwrap();
//! assert_eq!(tetris.title(), "Tetris");
//! assert!(routes.is_loaded(RouteName::Tetris));
//! ```

pub mod table;
pub mod view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use table::{
    normalize_base, Component, LazyModule, LoadError, LoaderFn, RouteEntry, RouteError,
    RouteTable, RouteTableError,
};
pub use view::{GameView, HomeView, MountFn, TetrisView, View};
