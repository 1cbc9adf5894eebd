//! Task records and the ordered task collection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::error::TaskError;
use crate::utils::task_hash;

/// Opaque, immutable identifier assigned when a task is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub const LEN: usize = 16;

    /// Accept a user-supplied id: exactly 16 hex digits, case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() == Self::LEN && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive an id that is not already in `taken`, re-salting on collision.
    pub(crate) fn generate(
        text: &str,
        deadline: &str,
        salt: &str,
        seq: usize,
        taken: &HashSet<TaskId>,
    ) -> Self {
        let mut attempt = 0usize;
        loop {
            let candidate = Self(task_hash(text, deadline, salt, seq, attempt));
            if !taken.contains(&candidate) {
                return candidate;
            }
            attempt += 1;
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One to-do item. On disk the fields are `id`, `text`, `isCompleted`, `deadline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
    /// Deadline as entered; empty means "no deadline".
    #[serde(default)]
    pub deadline: String,
}

impl TaskRecord {
    pub fn has_deadline(&self) -> bool {
        !self.deadline.trim().is_empty()
    }
}

/// Addresses one record: by storage index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRef {
    Index(usize),
    Id(TaskId),
}

impl From<usize> for TaskRef {
    fn from(index: usize) -> Self {
        TaskRef::Index(index)
    }
}

impl From<TaskId> for TaskRef {
    fn from(id: TaskId) -> Self {
        TaskRef::Id(id)
    }
}

impl From<&TaskId> for TaskRef {
    fn from(id: &TaskId) -> Self {
        TaskRef::Id(id.clone())
    }
}

/// Ordered task collection in storage order (most recently added first).
///
/// Mutations live in [`crate::mutate`] and always return a new list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<TaskRecord>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    pub fn as_slice(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn into_records(self) -> Vec<TaskRecord> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.tasks.iter()
    }

    pub fn ids(&self) -> HashSet<TaskId> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }

    /// Resolve a reference to a storage index.
    pub fn position_of(&self, target: &TaskRef) -> Result<usize, TaskError> {
        match target {
            TaskRef::Index(index) if *index < self.tasks.len() => Ok(*index),
            TaskRef::Index(index) => {
                Err(TaskError::IndexOutOfRange { index: *index, len: self.tasks.len() })
            }
            TaskRef::Id(id) => self
                .tasks
                .iter()
                .position(|t| &t.id == id)
                .ok_or_else(|| TaskError::UnknownTask(id.to_string())),
        }
    }

    pub fn get(&self, target: &TaskRef) -> Option<&TaskRecord> {
        self.position_of(target).ok().map(|i| &self.tasks[i])
    }

    /// Give every record without an id (or with a duplicated one) a fresh id.
    ///
    /// Payloads written before ids existed are addressed positionally only;
    /// ids derived here are deterministic for a given payload.
    pub fn with_missing_ids(mut self) -> Self {
        let mut taken: HashSet<TaskId> = HashSet::with_capacity(self.tasks.len());
        let mut needs_id = Vec::new();
        for (index, task) in self.tasks.iter().enumerate() {
            if task.id.is_empty() || !taken.insert(task.id.clone()) {
                needs_id.push(index);
            }
        }
        for index in needs_id {
            let task = &self.tasks[index];
            let id = TaskId::generate(&task.text, &task.deadline, "stored", index, &taken);
            taken.insert(id.clone());
            self.tasks[index].id = id;
        }
        self
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
