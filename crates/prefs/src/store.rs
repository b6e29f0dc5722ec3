//! Key-value persistence capability.
//!
//! The theme store never touches a global; it is handed something that
//! implements [`KeyValueStore`]. `MemoryStore` backs tests and the fallback
//! path, `FileStore` keeps values in a small JSON file on disk.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("state file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-keyed, string-valued persisted state.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current on-disk layout version
pub const STATE_FILE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct StateFile {
    version: u32,
    entries: BTreeMap<String, String>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_FILE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON-file backed store.
///
/// Every `get` re-reads the file and every `set` rewrites it, so two stores
/// pointed at the same path observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StateFile, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StateFile::default()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(StateFile::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, state: &StateFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(state)?;
        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    /// Corrupt JSON is replaced by a fresh record; IO errors still fail the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = match self.load() {
            Ok(state) => state,
            Err(StoreError::Json(e)) => {
                eprintln!(
                    "[Store] Discarding unreadable state file {}: {}",
                    self.path.display(),
                    e
                );
                StateFile::default()
            }
            Err(e) => return Err(e),
        };
        state.version = STATE_FILE_VERSION;
        state.entries.insert(key.to_string(), value.to_string());
        self.save(&state)
    }
}
