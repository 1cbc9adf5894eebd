//! deadline-todo: a to-do list that tracks deadlines
//!
//! The library holds the task model, the pure derivations over it (sorting,
//! urgency, aggregate counts), the mutation operations and a key-value
//! backed store. The `deadline-todo` binary is a thin CLI on top.

pub mod analysis;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod mutate;
pub mod render;
pub mod store;
pub mod utils;

pub use analysis::{aggregate, sorted_view, Summary, Urgency};
pub use domain::{Config, Deadline, TaskError, TaskId, TaskList, TaskRecord, TaskRef};
pub use mutate::NewTask;
pub use store::{FileStore, KeyValueStore, MemoryStore, TaskStore};
