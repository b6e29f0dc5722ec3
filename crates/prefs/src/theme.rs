//! Theme preference store.
//!
//! Two states, light and dark. The initial state is derived on mount from the
//! persisted `theme` key, falling back to the colour-scheme probe and then to
//! light. Every toggle writes the new state back synchronously.
//!
//! Storage is best effort: a failed read counts as "nothing persisted" and a
//! failed write leaves the in-memory toggle in place.

use std::fmt;

use crate::scheme::ColorSchemeProbe;
use crate::store::KeyValueStore;

/// Persisted key holding the theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Persisted spelling: `"dark"` / `"light"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEffect {
    Persist(Theme),
}

/// Toggle transition: flip the state and persist the result.
pub fn transition(current: Theme) -> (Theme, ThemeEffect) {
    let next = current.toggled();
    (next, ThemeEffect::Persist(next))
}

/// Resolve the mount-time theme.
///
/// A persisted `"dark"` is dark and any other non-empty persisted value is
/// light. With nothing persisted the probe decides, and an unsupported probe
/// means light. The probe is only consulted when nothing is persisted.
pub fn initial_theme<P>(persisted: Option<&str>, probe: &P) -> Theme
where
    P: ColorSchemeProbe + ?Sized,
{
    match persisted {
        Some(value) if !value.is_empty() => Theme::from_is_dark(value == Theme::Dark.as_str()),
        _ => Theme::from_is_dark(probe.prefers_dark().unwrap_or(false)),
    }
}

/// Theme state owned by one mounted view.
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Derive the initial theme from `store` and `probe`. Never fails.
    pub fn mount<P>(store: S, probe: &P) -> Self
    where
        P: ColorSchemeProbe + ?Sized,
    {
        let persisted = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("[Theme] Failed to read persisted theme, ignoring it: {}", e);
                None
            }
        };
        let theme = initial_theme(persisted.as_deref(), probe);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let (next, effect) = transition(self.theme);
        self.theme = next;
        self.apply(effect);
        next
    }

    fn apply(&mut self, effect: ThemeEffect) {
        match effect {
            ThemeEffect::Persist(theme) => {
                if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
                    eprintln!("[Theme] Failed to persist theme {}: {}", theme, e);
                }
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
