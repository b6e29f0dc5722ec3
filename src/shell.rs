//! Line-based hub shell.
//!
//! The shell owns the route table, the theme store and the currently mounted
//! view. Each input line is one user event and is handled to completion
//! before the next is read.

use anyhow::{Context, Result};

use crate::core::{catalog, Tetromino};
use crate::prefs::{ColorSchemeProbe, KeyValueStore, Theme, ThemeStore};
use crate::router::{RouteError, RouteTable, View};
use crate::types::{RouteName, EMPTY_CELL};

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the text if non-empty
    Continue(String),
    Quit,
}

pub struct Shell<S: KeyValueStore> {
    routes: RouteTable,
    theme: ThemeStore<S>,
    current: Box<dyn View>,
}

impl<S: KeyValueStore> Shell<S> {
    /// Mount the theme and the home view.
    pub fn new<P>(routes: RouteTable, store: S, probe: &P) -> Result<Self>
    where
        P: ColorSchemeProbe + ?Sized,
    {
        let theme = ThemeStore::mount(store, probe);
        let home = routes
            .path_for(RouteName::Home)
            .context("route table has no home route")?
            .to_string();
        let current = routes
            .navigate(&home)
            .with_context(|| format!("failed to mount home at {home}"))?;
        Ok(Self {
            routes,
            theme,
            current,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn current(&self) -> &dyn View {
        self.current.as_ref()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn theme_store(&self) -> &ThemeStore<S> {
        &self.theme
    }

    pub fn prompt(&self) -> String {
        format!("[{}] {}> ", self.theme.theme(), self.current.route())
    }

    pub fn banner(&self) -> String {
        format!("{}\n{}", self.current.title(), self.current.describe())
    }

    pub fn handle(&mut self, line: &str) -> Outcome {
        let input = line.trim();
        match input {
            "" => Outcome::Continue(String::new()),
            "quit" | "q" => Outcome::Quit,
            "help" => Outcome::Continue(HELP.to_string()),
            "theme" => {
                let theme = self.theme.toggle();
                Outcome::Continue(format!("theme: {theme}"))
            }
            "routes" => Outcome::Continue(self.list_routes()),
            "pieces" => Outcome::Continue(list_pieces(catalog())),
            path if path.starts_with('/') => Outcome::Continue(self.open(path)),
            other => {
                let path = RouteName::from_str(other)
                    .and_then(|name| self.routes.path_for(name))
                    .map(str::to_string);
                match path {
                    Some(path) => Outcome::Continue(self.open(&path)),
                    None => Outcome::Continue(format!("unknown command `{other}`; type `help`")),
                }
            }
        }
    }

    fn open(&mut self, location: &str) -> String {
        match self.routes.navigate(location) {
            Ok(view) => {
                self.current = view;
                self.banner()
            }
            Err(e @ RouteError::NotFound { .. }) => e.to_string(),
            Err(e @ RouteError::Load { .. }) => format!("{:#}", anyhow::Error::new(e)),
        }
    }

    fn list_routes(&self) -> String {
        let mut out = String::new();
        for entry in self.routes.entries() {
            let loading = if !entry.component.is_lazy() {
                "eager"
            } else if entry.component.is_loaded() {
                "lazy, loaded"
            } else {
                "lazy"
            };
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!(
                "{:<22} {:<10} ({})",
                entry.path, entry.name, loading
            ));
        }
        out
    }
}

const HELP: &str = "commands:
  /path      open the view at a path
  <name>     open a view by route name (home, snake, memory, tictactoe, tetris)
  theme      toggle light/dark
  routes     list routes
  pieces     show the tetromino catalog
  quit, q    leave";

/// Render catalog grids with `.` for empty cells and the cell value otherwise.
pub fn list_pieces(pieces: &[Tetromino]) -> String {
    let mut blocks = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let mut block = format!("{} {}", piece.kind.as_str(), piece.color);
        for row in piece.shape.rows() {
            block.push_str("\n  ");
            for &cell in row {
                if cell == EMPTY_CELL {
                    block.push('.');
                } else {
                    block.push(char::from(b'0' + cell));
                }
            }
        }
        blocks.push(block);
    }
    blocks.join("\n")
}
