use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StoreError;
use crate::models::{HistoryEntry, Todo};

use super::{HistoryRepository, TodoRepository};

const HISTORY_FILE: &str = "history.json";
const TODOS_FILE: &str = "todos.json";

/// JSON files under one data directory.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// `None` if the file is missing or cannot be decoded.
    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.file_path(name);
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read store file");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(data) => Some(data),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable store file");
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, name: &str, data: &T) -> Result<(), StoreError> {
        let path = self.file_path(name);
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl HistoryRepository for JsonStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.read(HISTORY_FILE).unwrap_or_default()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        self.write(HISTORY_FILE, entries)
    }
}

impl TodoRepository for JsonStore {
    fn load(&self) -> Option<Vec<Todo>> {
        self.read(TODOS_FILE)
    }

    fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        self.write(TODOS_FILE, todos)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(title: &str, minute: u32) -> HistoryEntry {
        HistoryEntry {
            quiz_title: "Food Quiz".to_string(),
            result_title: title.to_string(),
            completed_at: Utc.with_ymd_and_hms(2026, 2, 14, 9, minute, 0).unwrap(),
        }
    }

    #[test]
    fn history_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        assert!(HistoryRepository::load(&store).is_empty());
    }

    #[test]
    fn append_puts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.append(entry("The Curious Taster", 1)).unwrap();
        store.append(entry("The Bold Food Explorer", 2)).unwrap();

        let reopened = JsonStore::new(dir.path()).unwrap();
        let titles: Vec<String> = HistoryRepository::load(&reopened)
            .into_iter()
            .map(|e| e.result_title)
            .collect();
        assert_eq!(titles, ["The Bold Food Explorer", "The Curious Taster"]);
    }

    #[test]
    fn corrupt_history_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(HISTORY_FILE), "[{ broken").unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        assert!(HistoryRepository::load(&store).is_empty());
    }

    #[test]
    fn clear_removes_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.append(entry("The Curious Taster", 1)).unwrap();
        store.clear().unwrap();
        assert!(HistoryRepository::load(&store).is_empty());
    }

    #[test]
    fn missing_todo_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        assert!(TodoRepository::load(&store).is_none());
    }

    #[test]
    fn write_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        TodoRepository::save(&store, &[Todo::new("Workout")]).unwrap();
        assert!(dir.path().join(TODOS_FILE).exists());
        assert!(!dir.path().join("todos.tmp").exists());
    }
}
