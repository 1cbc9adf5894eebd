//! Core domain types shared by every layer.

pub mod config;
pub mod deadline;
pub mod error;
pub mod task;

pub use config::{Config, ExportFormat};
pub use deadline::Deadline;
pub use error::{StoreError, TaskError};
pub use task::{TaskId, TaskList, TaskRecord, TaskRef};

/// Key the task collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Upper bound on copies a single add may create.
pub const DEFAULT_MAX_DUPLICATES: u32 = 366;
