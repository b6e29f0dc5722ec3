//! Route table: static paths to views, with lazily loaded game modules.
//!
//! Every route's component is either eager (a mount function available up
//! front) or lazy (a loader that must resolve to a mount function first). A
//! lazy module is loaded on the first navigation to its route and cached;
//! each navigation still mounts a fresh view instance.

use std::cell::OnceCell;
use std::fmt;

use thiserror::Error;

use crate::types::RouteName;
use crate::view::{
    mount_home, mount_memory, mount_snake, mount_tetris, mount_tictactoe, MountFn, View,
};

/// Failure resolving a lazy view module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view module `{module}`: {reason}")]
pub struct LoadError {
    pub module: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route matches `{path}`")]
    NotFound { path: String },
    #[error("could not open the {route} view")]
    Load {
        route: RouteName,
        #[source]
        source: LoadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route path `{path}` is already registered")]
    DuplicatePath { path: String },
    #[error("route path `{path}` must start with `/`")]
    InvalidPath { path: String },
}

/// Deferred module factory
pub type LoaderFn = Box<dyn Fn() -> Result<MountFn, LoadError>>;

/// A lazily loaded view module.
pub struct LazyModule {
    loader: LoaderFn,
    resolved: OnceCell<MountFn>,
}

impl LazyModule {
    pub fn new(loader: impl Fn() -> Result<MountFn, LoadError> + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            resolved: OnceCell::new(),
        }
    }

    /// Module that is always available once requested.
    pub fn ready(mount: MountFn) -> Self {
        Self::new(move || Ok(mount))
    }

    pub fn is_loaded(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Load the module if needed. Failures are not cached.
    pub fn resolve(&self) -> Result<MountFn, LoadError> {
        if let Some(mount) = self.resolved.get() {
            return Ok(*mount);
        }
        let mount = (self.loader)()?;
        Ok(*self.resolved.get_or_init(|| mount))
    }
}

impl fmt::Debug for LazyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyModule")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[derive(Debug)]
pub enum Component {
    Eager(MountFn),
    Lazy(LazyModule),
}

impl Component {
    pub fn lazy(loader: impl Fn() -> Result<MountFn, LoadError> + 'static) -> Self {
        Component::Lazy(LazyModule::new(loader))
    }

    /// Eager components count as always loaded.
    pub fn is_loaded(&self) -> bool {
        match self {
            Component::Eager(_) => true,
            Component::Lazy(module) => module.is_loaded(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Component::Lazy(_))
    }
}

#[derive(Debug)]
pub struct RouteEntry {
    /// Full path including the base
    pub path: String,
    pub name: RouteName,
    pub component: Component,
    relative: String,
}

impl RouteEntry {
    /// Path relative to the router base
    pub fn relative_path(&self) -> &str {
        &self.relative
    }
}

/// Static path-to-view table
#[derive(Debug)]
pub struct RouteTable {
    base: String,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The hub's routes under `base`: home is eager, every game is lazy.
    pub fn new(base: &str) -> Self {
        let mut table = Self::empty(base);
        table.push(RouteName::Home, Component::Eager(mount_home));
        table.push(RouteName::Snake, Component::Lazy(LazyModule::ready(mount_snake)));
        table.push(RouteName::Memory, Component::Lazy(LazyModule::ready(mount_memory)));
        table.push(
            RouteName::TicTacToe,
            Component::Lazy(LazyModule::ready(mount_tictactoe)),
        );
        table.push(RouteName::Tetris, Component::Lazy(LazyModule::ready(mount_tetris)));
        table
    }

    /// Table with no routes.
    pub fn empty(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, name: RouteName, component: Component) {
        let relative = name.path().to_string();
        self.entries.push(RouteEntry {
            path: join_base(&self.base, &relative),
            name,
            component,
            relative,
        });
    }

    /// Register a route. `path` is relative to the base.
    pub fn add(
        &mut self,
        path: &str,
        name: RouteName,
        component: Component,
    ) -> Result<&mut Self, RouteTableError> {
        if !path.starts_with('/') {
            return Err(RouteTableError::InvalidPath {
                path: path.to_string(),
            });
        }
        let relative = normalize_path(path).to_string();
        if self.entries.iter().any(|e| e.relative == relative) {
            return Err(RouteTableError::DuplicatePath {
                path: join_base(&self.base, &relative),
            });
        }
        self.entries.push(RouteEntry {
            path: join_base(&self.base, &relative),
            name,
            component,
            relative,
        });
        Ok(self)
    }

    /// Normalised base path, always with leading and trailing `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Match a location (query and hash ignored, trailing `/` optional).
    pub fn resolve(&self, location: &str) -> Option<&RouteEntry> {
        let path = strip_query_and_hash(location);
        let relative = normalize_path(self.strip_base(path)?);
        self.entries.iter().find(|e| e.relative == relative)
    }

    /// Full path registered for `name`
    pub fn path_for(&self, name: RouteName) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.path.as_str())
    }

    pub fn is_loaded(&self, name: RouteName) -> bool {
        self.entries
            .iter()
            .any(|e| e.name == name && e.component.is_loaded())
    }

    /// Resolve `location`, load its module if needed, and mount a new view.
    pub fn navigate(&self, location: &str) -> Result<Box<dyn View>, RouteError> {
        let entry = self.resolve(location).ok_or_else(|| RouteError::NotFound {
            path: location.to_string(),
        })?;

        let mount = match &entry.component {
            Component::Eager(mount) => *mount,
            Component::Lazy(module) => {
                let was_loaded = module.is_loaded();
                let mount = module.resolve().map_err(|source| {
                    eprintln!("[Router] Failed to load {} view: {}", entry.name, source);
                    RouteError::Load {
                        route: entry.name,
                        source,
                    }
                })?;
                if !was_loaded {
                    eprintln!("[Router] Loaded {} view", entry.name);
                }
                mount
            }
        };

        Ok(mount(self))
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(base)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// `""` -> `/`, `arcade` -> `/arcade/`, `/arcade` -> `/arcade/`
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    if relative == "/" {
        format!("{base}/")
    } else {
        format!("{base}{relative}")
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn strip_query_and_hash(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_normalisation() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("arcade"), "/arcade/");
        assert_eq!(normalize_base("/arcade"), "/arcade/");
        assert_eq!(normalize_base("/games/arcade/"), "/games/arcade/");
    }

    #[test]
    fn join_keeps_single_slashes() {
        assert_eq!(join_base("/", "/"), "/");
        assert_eq!(join_base("/", "/game/snake"), "/game/snake");
        assert_eq!(join_base("/arcade/", "/"), "/arcade/");
        assert_eq!(join_base("/arcade/", "/game/snake"), "/arcade/game/snake");
    }

    #[test]
    fn query_and_hash_are_ignored() {
        assert_eq!(strip_query_and_hash("/game/tetris?level=3"), "/game/tetris");
        assert_eq!(strip_query_and_hash("/game/tetris#top"), "/game/tetris");
        assert_eq!(strip_query_and_hash("/"), "/");
    }

    #[test]
    fn strip_base_requires_segment_boundary() {
        let table = RouteTable::empty("/arcade");
        assert_eq!(table.strip_base("/arcade"), Some("/"));
        assert_eq!(table.strip_base("/arcade/game/snake"), Some("/game/snake"));
        assert_eq!(table.strip_base("/arcadegame"), None);
        assert_eq!(table.strip_base("/game/snake"), None);
    }

    #[test]
    fn lazy_module_caches_success() {
        let module = LazyModule::ready(mount_tetris);
        assert!(!module.is_loaded());
        module.resolve().unwrap();
        assert!(module.is_loaded());
        assert!(format!("{:?}", module).contains("loaded: true"));
    }
}
