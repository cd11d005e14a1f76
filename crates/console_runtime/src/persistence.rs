//! History persistence adapters: one well-known key, best-effort loading.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::reducer::HISTORY_LIMIT;

/// Well-known storage key for the persisted history list. File-backed stores
/// use it as the file name.
pub const HISTORY_STORAGE_KEY: &str = "console.history.v1.json";

/// Durable storage for the command history list.
///
/// Loading is best-effort by contract: corrupt or missing data yields an
/// empty history rather than an error.
pub trait HistoryStore {
    /// Loads the persisted history, oldest first.
    fn load(&self) -> Vec<String>;

    /// Persists `history`, keeping at most the most recent
    /// [`HISTORY_LIMIT`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage fails.
    fn save(&self, history: &[String]) -> Result<(), String>;
}

fn persisted_tail(history: &[String]) -> &[String] {
    &history[history.len().saturating_sub(HISTORY_LIMIT)..]
}

/// In-memory store used by tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    inner: Rc<RefCell<Vec<String>>>,
}

impl MemoryHistoryStore {
    /// Snapshot of the currently stored list.
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.borrow().clone()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<String> {
        self.snapshot()
    }

    fn save(&self, history: &[String]) -> Result<(), String> {
        *self.inner.borrow_mut() = persisted_tail(history).to_vec();
        Ok(())
    }
}

/// JSON-file store writing the history as a flat array of strings.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Creates a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store using [`HISTORY_STORAGE_KEY`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(HISTORY_STORAGE_KEY))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Vec<String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "discarding corrupt history: {err}");
                Vec::new()
            }
        }
    }

    fn save(&self, history: &[String]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
        let payload =
            serde_json::to_string(persisted_tail(history)).map_err(|err| err.to_string())?;
        fs::write(&self.path, payload).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_store_round_trips_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileHistoryStore::in_dir(dir.path());
        let history = vec!["ls".to_string(), "cat about".to_string()];
        store.save(&history).expect("save");
        assert_eq!(store.load(), history);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileHistoryStore::in_dir(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileHistoryStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").expect("write");
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_caps_at_the_most_recent_hundred() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileHistoryStore::in_dir(dir.path());
        let history: Vec<String> = (0..130).map(|index| format!("cmd-{index}")).collect();
        store.save(&history).expect("save");
        let loaded = store.load();
        assert_eq!(loaded.len(), HISTORY_LIMIT);
        assert_eq!(loaded[0], "cmd-30");
    }

    #[test]
    fn memory_store_tracks_saves() {
        let store = MemoryHistoryStore::default();
        store.save(&["ls".to_string()]).expect("save");
        assert_eq!(store.snapshot(), vec!["ls"]);
    }
}
