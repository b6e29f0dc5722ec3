//! Hub configuration from environment variables.
//!
//! - `ARCADE_BASE_URL`: router base path. A value baked in at build time via
//!   `option_env!` is used unless the variable is also set at runtime.
//! - `ARCADE_STATE_PATH`: JSON file holding persisted preferences.
//! - `ARCADE_COLOR_SCHEME`: forces the colour-scheme probe (`dark` / `light`).

use std::env;
use std::path::PathBuf;

use crate::prefs::{EnvColorScheme, COLOR_SCHEME_ENV};

pub const BASE_URL_ENV: &str = "ARCADE_BASE_URL";
pub const STATE_PATH_ENV: &str = "ARCADE_STATE_PATH";

const STATE_DIR_NAME: &str = "tui-arcade";
const STATE_FILE_NAME: &str = "state.json";

#[derive(Debug, Clone)]
pub struct HubConfig {
    pub base_url: String,
    pub state_path: PathBuf,
    pub color_scheme: EnvColorScheme,
}

impl HubConfig {
    pub fn from_env() -> Self {
        let base_url = non_empty(env::var(BASE_URL_ENV).ok())
            .or_else(|| non_empty(option_env!("ARCADE_BASE_URL").map(str::to_string)))
            .unwrap_or_else(|| "/".to_string());

        let state_path = non_empty(env::var(STATE_PATH_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                default_state_path(
                    non_empty(env::var("XDG_STATE_HOME").ok()),
                    non_empty(env::var("HOME").ok()),
                )
            });

        Self {
            base_url,
            state_path,
            color_scheme: EnvColorScheme::from_env(),
        }
    }

    /// Human-readable summary of where settings came from
    pub fn describe(&self) -> String {
        format!(
            "base={} state={} ({} overrides colour scheme)",
            self.base_url,
            self.state_path.display(),
            COLOR_SCHEME_ENV
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

/// `$XDG_STATE_HOME/tui-arcade/state.json`, else `$HOME/.local/state/...`,
/// else a file in the working directory.
pub fn default_state_path(xdg_state_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(dir) = xdg_state_home {
        return PathBuf::from(dir).join(STATE_DIR_NAME).join(STATE_FILE_NAME);
    }
    if let Some(home) = home {
        return PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(STATE_DIR_NAME)
            .join(STATE_FILE_NAME);
    }
    PathBuf::from("tui-arcade-state.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_state_home_wins() {
        let path = default_state_path(Some("/x/state".into()), Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/x/state/tui-arcade/state.json"));
    }

    #[test]
    fn home_fallback() {
        let path = default_state_path(None, Some("/home/u".into()));
        assert_eq!(
            path,
            PathBuf::from("/home/u/.local/state/tui-arcade/state.json")
        );
    }

    #[test]
    fn working_directory_fallback() {
        assert_eq!(
            default_state_path(None, None),
            PathBuf::from("tui-arcade-state.json")
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(Some(" /arcade ".into())).as_deref(), Some("/arcade"));
        assert_eq!(non_empty(None), None);
    }
}
