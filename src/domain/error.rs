//! Error types for task mutations and the task store.

use thiserror::Error;

/// A rejected mutation. The collection it was applied to is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task index {index} is out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no task with id {0}")]
    UnknownTask(String),

    #[error("deadline {0:?} is empty or not a recognised date/time")]
    InvalidDeadline(String),

    #[error("refusing to create {requested} copies of a task (maximum is {max})")]
    TooManyDuplicates { requested: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access stored key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored task list under key '{key}' is malformed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize task list: {0}")]
    Serialize(#[source] serde_json::Error),
}
