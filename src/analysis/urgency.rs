//! Per-task urgency classification.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::domain::{Deadline, TaskRecord};

/// Width of the default "due soon" window: 24 hours.
pub const DUE_SOON_WINDOW_MS: i64 = 86_400_000;

fn default_window() -> Duration {
    Duration::milliseconds(DUE_SOON_WINDOW_MS)
}

/// Badge shown next to a task. Variants are mutually exclusive and listed
/// in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    DueToday,
    DueSoon,
    None,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::DueSoon => "due_soon",
            Self::None => "none",
        }
    }

    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Overdue => Some("警告！"),
            Self::DueToday => Some("急げ！"),
            Self::DueSoon => Some("まもなく"),
            Self::None => None,
        }
    }
}

fn deadline_of(task: &TaskRecord) -> Option<NaiveDateTime> {
    Deadline::parse(&task.deadline).map(|d| d.local())
}

/// Open task whose valid deadline is strictly before `now`.
pub fn is_overdue(task: &TaskRecord, now: NaiveDateTime) -> bool {
    !task.is_completed && deadline_of(task).is_some_and(|deadline| deadline < now)
}

/// Deadline falls on the same local calendar date as `now`.
pub fn is_due_today(task: &TaskRecord, now: NaiveDateTime) -> bool {
    deadline_of(task).is_some_and(|deadline| deadline.date() == now.date())
}

/// Deadline is after `now` and no further away than `window`.
pub fn is_due_within(task: &TaskRecord, now: NaiveDateTime, window: Duration) -> bool {
    deadline_of(task).is_some_and(|deadline| deadline > now && deadline - now <= window)
}

pub fn is_due_within_24h(task: &TaskRecord, now: NaiveDateTime) -> bool {
    is_due_within(task, now, default_window())
}

/// Classify with the default 24h window.
pub fn classify(task: &TaskRecord, now: NaiveDateTime) -> Urgency {
    classify_with_window(task, now, default_window())
}

/// Precedence: overdue > due today > due soon > none. Completion only matters
/// through [`is_overdue`].
pub fn classify_with_window(task: &TaskRecord, now: NaiveDateTime, window: Duration) -> Urgency {
    if is_overdue(task, now) {
        Urgency::Overdue
    } else if is_due_today(task, now) {
        Urgency::DueToday
    } else if is_due_within(task, now, window) {
        Urgency::DueSoon
    } else {
        Urgency::None
    }
}
