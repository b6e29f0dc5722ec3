//! System colour-scheme preference.

use std::env;

/// Environment variable forcing the reported preference (`dark` / `light`)
pub const COLOR_SCHEME_ENV: &str = "ARCADE_COLOR_SCHEME";

/// Answers "does the environment prefer a dark colour scheme?"
pub trait ColorSchemeProbe {
    /// `None` when the environment cannot answer.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticColorScheme(pub Option<bool>);

impl StaticColorScheme {
    pub const DARK: Self = Self(Some(true));
    pub const LIGHT: Self = Self(Some(false));
    pub const UNSUPPORTED: Self = Self(None);
}

impl ColorSchemeProbe for StaticColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Terminal-environment probe.
///
/// Checks `ARCADE_COLOR_SCHEME` first, then the `COLORFGBG` variable many
/// terminals export (`"<fg>;<bg>"`, background is the last field).
#[derive(Debug, Clone, Default)]
pub struct EnvColorScheme {
    override_value: Option<String>,
    colorfgbg: Option<String>,
}

impl EnvColorScheme {
    pub fn from_env() -> Self {
        Self {
            override_value: env::var(COLOR_SCHEME_ENV).ok(),
            colorfgbg: env::var("COLORFGBG").ok(),
        }
    }

    /// Build from explicit values instead of the process environment.
    pub fn from_values(override_value: Option<&str>, colorfgbg: Option<&str>) -> Self {
        Self {
            override_value: override_value.map(str::to_string),
            colorfgbg: colorfgbg.map(str::to_string),
        }
    }
}

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(v) = self.override_value.as_deref() {
            match v.trim().to_lowercase().as_str() {
                "dark" => return Some(true),
                "light" => return Some(false),
                _ => {}
            }
        }
        self.colorfgbg.as_deref().and_then(parse_colorfgbg)
    }
}

/// Dark when the background is one of the dark ANSI colours (0-6, 8).
fn parse_colorfgbg(raw: &str) -> Option<bool> {
    let bg: u8 = raw.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}
