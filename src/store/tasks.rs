//! Task collection persistence under a single fixed key.

use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::domain::{StoreError, TaskList, DEFAULT_STORAGE_KEY};

/// Loads and saves the whole collection as one JSON value.
pub struct TaskStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Strict load: a missing key is an empty list, anything else that goes
    /// wrong is reported.
    pub fn try_load(&self) -> Result<TaskList, StoreError> {
        let raw = self
            .backend
            .get(&self.key)
            .map_err(|source| StoreError::Io { key: self.key.clone(), source })?;
        let Some(raw) = raw else {
            debug!(key = %self.key, "no stored tasks");
            return Ok(TaskList::new());
        };
        let list: TaskList = serde_json::from_str(&raw)
            .map_err(|source| StoreError::Parse { key: self.key.clone(), source })?;
        debug!(key = %self.key, count = list.len(), "loaded tasks");
        Ok(list.with_missing_ids())
    }

    /// Lenient load: unreadable or malformed data is treated as no data.
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(list) => list,
            Err(e) => {
                warn!("{}; starting with an empty task list", e);
                TaskList::new()
            }
        }
    }

    /// Overwrite the stored collection.
    pub fn save(&self, list: &TaskList) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list).map_err(StoreError::Serialize)?;
        self.backend
            .set(&self.key, &raw)
            .map_err(|source| StoreError::Io { key: self.key.clone(), source })?;
        debug!(key = %self.key, count = list.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutate::NewTask;
    use crate::store::{FileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> TaskList {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let (list, _) = TaskList::new()
            .add(
                &NewTask::new("Pay rent").deadline("2024-07-01T09:00").duplicates(2).repeat_every_days(30),
                now,
            )
            .unwrap();
        let (list, _) = list.add(&NewTask::new("Buy milk, eggs"), now).unwrap();
        list.toggle(1usize).unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = TaskStore::new(MemoryStore::new());
        let list = sample();
        store.save(&list).expect("save");
        assert_eq!(store.load(), list);
        assert_eq!(store.try_load().expect("load"), list);
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = TaskStore::new(MemoryStore::new());
        assert!(store.try_load().expect("load").is_empty());
    }

    #[test]
    fn malformed_payload_loads_empty() {
        for raw in ["{not json", r#"{"text":"x"}"#, "[1,2,3]", r#"[{"isCompleted":true}]"#] {
            let store = TaskStore::new(MemoryStore::new());
            store.backend().set(DEFAULT_STORAGE_KEY, raw).unwrap();
            assert!(matches!(store.try_load(), Err(StoreError::Parse { .. })));
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn legacy_payload_gets_ids() {
        let store = TaskStore::new(MemoryStore::new());
        store
            .backend()
            .set(
                DEFAULT_STORAGE_KEY,
                r#"[{"text":"a","isCompleted":true,"deadline":""},{"text":"b","isCompleted":false,"deadline":"2023-12-31"}]"#,
            )
            .unwrap();
        let list = store.load();
        assert_eq!(list.len(), 2);
        assert_eq!(list.ids().len(), 2);
        assert!(list.iter().all(|t| !t.id.is_empty()));
        assert!(list.as_slice()[0].is_completed);
        assert_eq!(list.as_slice()[1].deadline, "2023-12-31");
        assert_eq!(store.load(), list);
    }

    #[test]
    fn file_backed_store_uses_custom_key() {
        let tmp = TempDir::new().expect("tmp");
        let store = TaskStore::with_key(FileStore::new(tmp.path()), "work");
        store.save(&sample()).expect("save");
        assert!(tmp.path().join("work.json").exists());
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn unreadable_payload_is_an_io_error() {
        let tmp = TempDir::new().expect("tmp");
        std::fs::create_dir_all(tmp.path().join("todos.json")).expect("mkdir");
        let store = TaskStore::new(FileStore::new(tmp.path()));
        assert!(matches!(store.try_load(), Err(StoreError::Io { .. })));
    }
}
