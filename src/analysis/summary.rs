//! Aggregate counts and percentages.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use super::urgency::{is_due_today, is_due_within, is_overdue, DUE_SOON_WINDOW_MS};
use crate::domain::TaskRecord;
use crate::utils::percentage;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed_count: usize,
    pub overdue_count: usize,
    pub overdue_pct: f64,
    pub today_count: usize,
    pub today_pct: f64,
    pub due_soon_count: usize,
}

impl Summary {
    pub fn has_overdue(&self) -> bool {
        self.overdue_count > 0
    }

    pub fn has_today(&self) -> bool {
        self.today_count > 0
    }
}

pub fn aggregate(tasks: &[TaskRecord], now: NaiveDateTime) -> Summary {
    aggregate_with_window(tasks, now, Duration::milliseconds(DUE_SOON_WINDOW_MS))
}

/// `due_soon_count` counts open tasks inside `window`, independent of the
/// badge precedence.
pub fn aggregate_with_window(tasks: &[TaskRecord], now: NaiveDateTime, window: Duration) -> Summary {
    let total = tasks.len();
    let overdue_count = tasks.iter().filter(|t| is_overdue(t, now)).count();
    let today_count = tasks.iter().filter(|t| is_due_today(t, now)).count();
    let due_soon_count =
        tasks.iter().filter(|t| !t.is_completed && is_due_within(t, now, window)).count();

    Summary {
        total,
        completed_count: tasks.iter().filter(|t| t.is_completed).count(),
        overdue_count,
        overdue_pct: percentage(overdue_count, total),
        today_count,
        today_pct: percentage(today_count, total),
        due_soon_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::is_overdue;
    use crate::domain::TaskId;
    use chrono::NaiveDate;

    fn task(deadline: &str, done: bool) -> TaskRecord {
        TaskRecord {
            id: TaskId::default(),
            text: "t".to_string(),
            is_completed: done,
            deadline: deadline.to_string(),
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn empty_list_has_zero_percentages() {
        let summary = aggregate(&[], noon());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.overdue_pct, 0.0);
        assert_eq!(summary.today_pct, 0.0);
        assert!(!summary.has_overdue());
    }

    #[test]
    fn counts_and_percentages() {
        let tasks = vec![
            task("2024-06-14T09:00", false), // overdue
            task("2024-06-14T09:00", true),  // completed, not overdue
            task("2024-06-15T18:00", false), // today + soon
            task("2024-06-16T09:00", false), // soon
            task("", false),
        ];
        let summary = aggregate(&tasks, noon());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.overdue_pct, 20.0);
        assert_eq!(summary.today_count, 1);
        assert_eq!(summary.today_pct, 20.0);
        assert_eq!(summary.due_soon_count, 2);
        assert!(summary.has_overdue() && summary.has_today());
    }

    #[test]
    fn overdue_count_matches_predicate() {
        let tasks: Vec<_> = ["2020-01-01", "", "2030-01-01", "2024-06-15T11:59", "x"]
            .iter()
            .enumerate()
            .map(|(i, d)| task(d, i % 2 == 1))
            .collect();
        let expected = tasks.iter().filter(|t| is_overdue(t, noon())).count();
        assert_eq!(aggregate(&tasks, noon()).overdue_count, expected);
    }
}
