//! Terminal listing of the sorted view with urgency badges.

use chrono::{Duration, NaiveDateTime};
use console::style;
use std::fmt::Write as _;

use crate::analysis::{aggregate_with_window, classify_with_window, sorted_view, Summary, Urgency};
use crate::domain::{Deadline, TaskRecord};

pub struct ListingOptions {
    pub now: NaiveDateTime,
    pub due_soon_window: Duration,
    pub show_ids: bool,
}

/// Banners, clock line and aggregate counts.
pub fn render_summary(summary: &Summary, now: NaiveDateTime) -> String {
    let mut out = String::new();
    if summary.has_overdue() {
        let _ = writeln!(out, "{}", style("警告！期限切れのタスクがあります！").red().bold());
    }
    if summary.has_today() {
        let _ = writeln!(out, "{}", style("今日のタスクがあります！").blue().bold());
    }
    let _ = writeln!(out, "Now: {}", now.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Total Tasks: {}", summary.total);
    let _ = writeln!(out, "Overdue Tasks: {} ({:.2}%)", summary.overdue_count, summary.overdue_pct);
    let _ = writeln!(out, "Today's Tasks: {} ({:.2}%)", summary.today_count, summary.today_pct);
    if summary.total == 0 {
        let _ = writeln!(out, "No tasks to do!");
    }
    out
}

/// Full listing: summary block followed by one numbered row per task.
///
/// Row numbers are positions in the sorted view and are what the CLI
/// accepts as task targets.
pub fn render_listing(tasks: &[TaskRecord], options: &ListingOptions) -> String {
    let summary = aggregate_with_window(tasks, options.now, options.due_soon_window);
    let mut out = render_summary(&summary, options.now);

    let sorted = sorted_view(tasks);
    if !sorted.is_empty() {
        out.push('\n');
    }
    for (index, task) in sorted.iter().enumerate() {
        let urgency = classify_with_window(task, options.now, options.due_soon_window);
        out.push_str(&render_row(index + 1, task, urgency, options.show_ids));
        out.push('\n');
    }
    out
}

fn render_row(position: usize, task: &TaskRecord, urgency: Urgency, show_ids: bool) -> String {
    let check = if task.is_completed { "[x]" } else { "[ ]" };
    let text = match urgency {
        _ if task.is_completed => style(task.text.as_str()).strikethrough(),
        Urgency::Overdue => style(task.text.as_str()).red(),
        Urgency::DueToday => style(task.text.as_str()).blue().bold(),
        Urgency::DueSoon => style(task.text.as_str()).yellow(),
        Urgency::None => style(task.text.as_str()),
    };

    let mut row = format!("{:>3}. {} {}", position, check, text);
    if task.has_deadline() {
        match Deadline::parse(&task.deadline) {
            Some(deadline) => {
                let _ = write!(row, "  @ {}", deadline.display());
            }
            None => {
                let _ = write!(row, "  @ {} (invalid)", task.deadline);
            }
        }
    }
    if let Some(badge) = urgency.badge() {
        let badge = match urgency {
            Urgency::Overdue => style(badge).red().bold(),
            Urgency::DueToday => style(badge).blue(),
            _ => style(badge).yellow(),
        };
        let _ = write!(row, "  {}", badge);
    }
    if show_ids {
        let _ = write!(row, "  {}", style(format!("[{}]", task.id)).dim());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use chrono::NaiveDate;

    fn task(text: &str, deadline: &str, done: bool) -> TaskRecord {
        TaskRecord {
            id: TaskId::default(),
            text: text.to_string(),
            is_completed: done,
            deadline: deadline.to_string(),
        }
    }

    fn options() -> ListingOptions {
        ListingOptions {
            now: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            due_soon_window: Duration::hours(24),
            show_ids: false,
        }
    }

    #[test]
    fn empty_listing_says_nothing_to_do() {
        console::set_colors_enabled(false);
        let out = render_listing(&[], &options());
        similar_asserts::assert_eq!(
            out,
            "Now: 2024-06-15 12:00:00\nTotal Tasks: 0\nOverdue Tasks: 0 (0.00%)\nToday's Tasks: 0 (0.00%)\nNo tasks to do!\n"
        );
    }

    #[test]
    fn listing_shows_banners_and_badges() {
        console::set_colors_enabled(false);
        let tasks = vec![
            task("tomorrow", "2024-06-16T09:00", false),
            task("late", "2024-06-14T09:00", false),
            task("tonight", "2024-06-15T23:00", false),
            task("done", "2024-06-10", true),
            task("whenever", "", false),
        ];
        let out = render_listing(&tasks, &options());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "警告！期限切れのタスクがあります！");
        assert_eq!(lines[1], "今日のタスクがあります！");
        assert!(out.contains("Overdue Tasks: 1 (20.00%)"));
        assert!(out.contains("Today's Tasks: 1 (20.00%)"));
        assert!(out.contains("  1. [ ] whenever\n"));
        assert!(out.contains("  2. [x] done  @ 2024-06-10 00:00\n"));
        assert!(out.contains("  3. [ ] late  @ 2024-06-14 09:00  警告！\n"));
        assert!(out.contains("  4. [ ] tonight  @ 2024-06-15 23:00  急げ！\n"));
        assert!(out.contains("  5. [ ] tomorrow  @ 2024-06-16 09:00  まもなく\n"));
    }

    #[test]
    fn invalid_deadline_is_flagged() {
        console::set_colors_enabled(false);
        let out = render_listing(&[task("odd", "someday", false)], &options());
        assert!(out.contains("  1. [ ] odd  @ someday (invalid)"));
    }
}
