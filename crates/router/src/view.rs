//! Views mounted by the router.
//!
//! A view instance owns whatever state it derives (the Tetris view owns its
//! board); nothing is shared between instances.

use std::fmt;

use crate::core::{catalog, Board, Tetromino};
use crate::table::RouteTable;
use crate::types::{PieceKind, RouteName};

/// A mounted page of the hub.
pub trait View: fmt::Debug {
    /// Route this view was mounted for
    fn route(&self) -> RouteName;

    fn title(&self) -> &str;

    /// One-paragraph plain-text summary shown by the shell.
    fn describe(&self) -> String;
}

/// Constructor for a fresh view instance, given the table mounting it
pub type MountFn = fn(&RouteTable) -> Box<dyn View>;

/// Landing page listing the games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    games: Vec<(RouteName, String)>,
}

impl HomeView {
    /// Home page advertising `games` as (route, full path) links.
    pub fn new(games: Vec<(RouteName, String)>) -> Self {
        Self { games }
    }

    /// Links to every game route registered in `routes`, base included.
    pub fn from_routes(routes: &RouteTable) -> Self {
        Self::new(
            routes
                .entries()
                .iter()
                .filter(|e| e.name.is_game())
                .map(|e| (e.name, e.path.clone()))
                .collect(),
        )
    }

    pub fn games(&self) -> &[(RouteName, String)] {
        &self.games
    }
}

impl View for HomeView {
    fn route(&self) -> RouteName {
        RouteName::Home
    }

    fn title(&self) -> &str {
        "Arcade"
    }

    fn describe(&self) -> String {
        let mut out = String::from("Pick a game:");
        for (game, path) in &self.games {
            out.push_str(&format!("\n  {:<10} {}", game.as_str(), path));
        }
        out
    }
}

/// Tetris page: an empty board plus the piece catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrisView {
    board: Board,
}

impl TetrisView {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &'static [Tetromino; 7] {
        catalog()
    }
}

impl Default for TetrisView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TetrisView {
    fn route(&self) -> RouteName {
        RouteName::Tetris
    }

    fn title(&self) -> &str {
        "Tetris"
    }

    fn describe(&self) -> String {
        let (px_w, px_h) = self.board.pixel_size();
        let letters: Vec<&str> = PieceKind::ALL.iter().map(PieceKind::as_str).collect();
        format!(
            "{}x{} board ({}x{} px), {} cells filled, pieces: {}",
            self.board.width(),
            self.board.height(),
            px_w,
            px_h,
            self.board.filled_count(),
            letters.join(" ")
        )
    }
}

/// Page for a game whose rules ship separately (snake, memory, tictactoe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    route: RouteName,
}

impl GameView {
    pub fn new(route: RouteName) -> Self {
        Self { route }
    }
}

impl View for GameView {
    fn route(&self) -> RouteName {
        self.route
    }

    fn title(&self) -> &str {
        match self.route {
            RouteName::Home => "Arcade",
            RouteName::Snake => "Snake",
            RouteName::Memory => "Memory",
            RouteName::TicTacToe => "Tic-Tac-Toe",
            RouteName::Tetris => "Tetris",
        }
    }

    fn describe(&self) -> String {
        format!("{}: no rules bundled with this build", self.title())
    }
}

pub(crate) fn mount_home(routes: &RouteTable) -> Box<dyn View> {
    Box::new(HomeView::from_routes(routes))
}

pub(crate) fn mount_tetris(_: &RouteTable) -> Box<dyn View> {
    Box::new(TetrisView::new())
}

pub(crate) fn mount_snake(_: &RouteTable) -> Box<dyn View> {
    Box::new(GameView::new(RouteName::Snake))
}

pub(crate) fn mount_memory(_: &RouteTable) -> Box<dyn View> {
    Box::new(GameView::new(RouteName::Memory))
}

pub(crate) fn mount_tictactoe(_: &RouteTable) -> Box<dyn View> {
    Box::new(GameView::new(RouteName::TicTacToe))
}
