//! Deadline-sorted view of the collection.

use crate::domain::{Deadline, TaskRecord};

/// Tasks sorted ascending by deadline.
///
/// Empty or unparseable deadlines sort before every valid one. The sort is
/// stable, so ties keep storage order and the view is idempotent.
pub fn sorted_view(tasks: &[TaskRecord]) -> Vec<TaskRecord> {
    let mut keyed: Vec<_> = tasks
        .iter()
        .map(|task| (Deadline::parse(&task.deadline).map(|d| d.local()), task))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, task)| task.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::sorted_view;
    use crate::domain::{TaskId, TaskRecord};

    fn task(text: &str, deadline: &str) -> TaskRecord {
        TaskRecord {
            id: TaskId::default(),
            text: text.to_string(),
            is_completed: false,
            deadline: deadline.to_string(),
        }
    }

    fn texts(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn sorts_by_deadline_with_missing_first() {
        let tasks = vec![
            task("late", "2024-03-01T09:00"),
            task("none", ""),
            task("early", "2024-01-01"),
            task("junk", "someday"),
            task("mid", "2024-02-01T09:00:00"),
        ];
        assert_eq!(texts(&sorted_view(&tasks)), vec!["none", "junk", "early", "mid", "late"]);
    }

    #[test]
    fn equal_deadlines_keep_storage_order() {
        let tasks = vec![
            task("b", "2024-01-01T09:00"),
            task("a", "2024-01-01T09:00:00"),
            task("c", "2024-01-01 09:00"),
        ];
        assert_eq!(texts(&sorted_view(&tasks)), vec!["b", "a", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let tasks = vec![
            task("x", "2024-05-01"),
            task("y", ""),
            task("z", "2023-05-01T10:00"),
            task("w", "bogus"),
        ];
        let once = sorted_view(&tasks);
        assert_eq!(sorted_view(&once), once);
    }
}
