//! Persistence of the task collection in a key-value store.

pub mod kv;
pub mod tasks;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::TaskStore;
