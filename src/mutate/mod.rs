//! Mutation operations on [`TaskList`].
//!
//! Every operation borrows the current list and returns a new one. On error
//! the caller still holds the untouched original.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Deadline, TaskError, TaskId, TaskList, TaskRecord, TaskRef, DEFAULT_MAX_DUPLICATES};

/// Input for [`TaskList::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    text: String,
    deadline: String,
    duplicate_count: u32,
    repeat_interval_days: u32,
    max_duplicates: u32,
}

impl NewTask {
    /// A single copy with no deadline.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deadline: String::new(),
            duplicate_count: 1,
            repeat_interval_days: 0,
            max_duplicates: DEFAULT_MAX_DUPLICATES,
        }
    }

    /// Base deadline for the first copy. Empty means no deadline.
    pub fn deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    /// Number of copies to create. Zero creates nothing.
    pub fn duplicates(mut self, count: u32) -> Self {
        self.duplicate_count = count;
        self
    }

    /// Days between the deadlines of consecutive copies.
    pub fn repeat_every_days(mut self, days: u32) -> Self {
        self.repeat_interval_days = days;
        self
    }

    pub fn max_duplicates(mut self, max: u32) -> Self {
        self.max_duplicates = max;
        self
    }

    /// Deadlines for each copy, in creation order.
    fn expand_deadlines(&self) -> Result<Vec<String>, TaskError> {
        let count = self.duplicate_count as usize;
        if self.deadline.trim().is_empty() {
            return Ok(vec![String::new(); count]);
        }
        let base = Deadline::parse(&self.deadline)
            .ok_or_else(|| TaskError::InvalidDeadline(self.deadline.clone()))?;
        (0..u64::from(self.duplicate_count))
            .map(|i| {
                base.shift_days(i * u64::from(self.repeat_interval_days))
                    .map(|d| d.to_storage_string())
                    .ok_or_else(|| TaskError::InvalidDeadline(self.deadline.clone()))
            })
            .collect()
    }
}

/// Clamp raw user input for a copy count; non-positive values mean zero copies.
pub fn duplicate_count_from(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

impl TaskList {
    /// Prepend `duplicate_count` new open tasks. Copy `i` is due
    /// `i * repeat_interval_days` calendar days after the base deadline.
    ///
    /// Returns the new list and the ids of the created tasks, first copy first.
    pub fn add(
        &self,
        new: &NewTask,
        now: NaiveDateTime,
    ) -> Result<(TaskList, Vec<TaskId>), TaskError> {
        if new.duplicate_count > new.max_duplicates {
            return Err(TaskError::TooManyDuplicates {
                requested: new.duplicate_count,
                max: new.max_duplicates,
            });
        }
        let deadlines = new.expand_deadlines()?;

        let mut taken = self.ids();
        let salt = now.format("%Y%m%dT%H%M%S%.f").to_string();
        let mut created = Vec::with_capacity(deadlines.len());
        for (seq, deadline) in deadlines.into_iter().enumerate() {
            let id = TaskId::generate(&new.text, &deadline, &salt, seq, &taken);
            taken.insert(id.clone());
            created.push(TaskRecord {
                id,
                text: new.text.clone(),
                is_completed: false,
                deadline,
            });
        }

        let ids: Vec<TaskId> = created.iter().map(|t| t.id.clone()).collect();
        debug!(count = ids.len(), text = %new.text, "adding tasks");
        created.extend(self.iter().cloned());
        Ok((TaskList::from_records(created), ids))
    }

    pub fn delete(&self, target: impl Into<TaskRef>) -> Result<TaskList, TaskError> {
        let index = self.position_of(&target.into())?;
        let mut tasks = self.as_slice().to_vec();
        let removed = tasks.remove(index);
        debug!(id = %removed.id, "deleted task");
        Ok(TaskList::from_records(tasks))
    }

    pub fn toggle(&self, target: impl Into<TaskRef>) -> Result<TaskList, TaskError> {
        let index = self.position_of(&target.into())?;
        let mut tasks = self.as_slice().to_vec();
        tasks[index].is_completed = !tasks[index].is_completed;
        debug!(id = %tasks[index].id, completed = tasks[index].is_completed, "toggled task");
        Ok(TaskList::from_records(tasks))
    }

    /// Replace a task's deadline. Empty or unparseable input is rejected.
    pub fn set_deadline(
        &self,
        target: impl Into<TaskRef>,
        deadline: &str,
    ) -> Result<TaskList, TaskError> {
        let index = self.position_of(&target.into())?;
        if !Deadline::is_valid(deadline) {
            return Err(TaskError::InvalidDeadline(deadline.to_string()));
        }
        let mut tasks = self.as_slice().to_vec();
        tasks[index].deadline = deadline.trim().to_string();
        debug!(id = %tasks[index].id, deadline = %tasks[index].deadline, "set deadline");
        Ok(TaskList::from_records(tasks))
    }

    /// Drop every completed task. Returns the new list and how many were removed.
    pub fn clear_completed(&self) -> (TaskList, usize) {
        let kept: Vec<TaskRecord> = self.iter().filter(|t| !t.is_completed).cloned().collect();
        let removed = self.len() - kept.len();
        (TaskList::from_records(kept), removed)
    }
}
