//! Persisted preferences for the arcade hub.
//!
//! Holds the single persisted preference, the light/dark theme, together with
//! the capabilities it is built on:
//!
//! - [`store`]: the [`KeyValueStore`] capability plus in-memory and JSON-file backends
//! - [`scheme`]: the [`ColorSchemeProbe`] used when nothing is persisted
//! - [`theme`]: the [`ThemeStore`] state machine and its pure [`transition`]
//!
//! # Example
//!
//! ```
//! use tui_arcade_prefs::{KeyValueStore, MemoryStore, StaticColorScheme, ThemeStore, THEME_KEY};
//!
//! let mut theme = ThemeStore::mount(MemoryStore::new(), &StaticColorScheme::DARK);
//! assert!(theme.is_dark());
//!
//! theme.toggle();
//! assert!(!theme.is_dark());
//! assert_eq!(theme.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
//! ```

pub mod scheme;
pub mod store;
pub mod theme;

pub use scheme::{ColorSchemeProbe, EnvColorScheme, StaticColorScheme, COLOR_SCHEME_ENV};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, STATE_FILE_VERSION};
pub use theme::{initial_theme, transition, Theme, ThemeEffect, ThemeStore, THEME_KEY};
