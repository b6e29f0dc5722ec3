//! Terminal arcade hub (workspace facade crate).
//!
//! Re-exports the hub's crates under `tui_arcade::{types,core,prefs,router}`
//! and adds the environment [`config`] and the line-based [`shell`] used by
//! the `tui-arcade` binary.

pub use tui_arcade_core as core;
pub use tui_arcade_prefs as prefs;
pub use tui_arcade_router as router;
pub use tui_arcade_types as types;

pub mod config;
pub mod shell;
