//! Key-value persistence for the tracker's JSON documents
//!
//! The core only ever talks to the [`Storage`] trait. Production code backs
//! it with one JSON file per key under the platform data directory; tests
//! back it with an in-memory map.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::{debug, warn};

/// Document key for the current plan
pub const PLAN_KEY: &str = "unitracker-plan";
/// Document key for the status override map
pub const STATUSES_KEY: &str = "unitracker-statuses";
/// Document key for the grade map
pub const GRADES_KEY: &str = "unitracker-grades";
/// Document key for display preferences
pub const PREFERENCES_KEY: &str = "unitracker-preferences";
/// Document key for the saved-plans library
pub const CUSTOM_PLANS_KEY: &str = "unitracker-custom-plans";

/// String-keyed storage for persisted documents
pub trait Storage {
    /// Raw value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be written
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Remove the value under `key`; absent keys are not an error
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be modified
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Parse the JSON document under `key`, falling back on absence or parse
/// failure. Parse failures are logged, never propagated; a corrupt
/// document must not take the whole tracker down.
pub fn load_json_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, fallback: T) -> T {
    match storage.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!("Loaded document '{key}' ({} bytes)", raw.len());
                value
            }
            Err(e) => {
                warn!("Stored document '{key}' is not valid JSON, using defaults: {e}");
                fallback
            }
        },
        None => {
            debug!("No stored document for '{key}', using defaults");
            fallback
        }
    }
}

/// Serialize `value` and store it under `key`
///
/// # Errors
/// Returns an error when serialization or the storage write fails
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> io::Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    storage.set(key, &raw)
}

/// File-backed storage: one `<key>.json` file per document
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir` (created lazily on first write)
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default document directory
    ///
    /// Returns:
    /// - Linux: `~/.local/share/unitracker`
    /// - macOS: `~/Library/Application Support/unitracker`
    /// - Windows: `%APPDATA%\unitracker`
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("unitracker")
    }

    /// Directory this storage reads and writes
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests. Cloning shares the underlying map, so a
/// test can hand one handle to the tracker and inspect through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store has no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
