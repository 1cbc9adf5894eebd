//! Export documents: plain text, CSV and a paginated text layout.

use crate::analysis::sorted_view;
use crate::domain::{ExportFormat, TaskRecord};

const NO_DEADLINE: &str = "なし";
const PAGE_BREAK: &str = "\u{000C}";

pub fn render_export(tasks: &[TaskRecord], format: ExportFormat, page_lines: usize) -> String {
    let sorted = sorted_view(tasks);
    match format {
        ExportFormat::Text => join_lines(sorted.iter().enumerate().map(|(i, t)| text_line(i + 1, t))),
        ExportFormat::Csv => join_lines(sorted.iter().enumerate().map(|(i, t)| csv_line(i + 1, t))),
        ExportFormat::Paged => paged(&sorted, page_lines.max(1)),
    }
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn deadline_text(task: &TaskRecord) -> &str {
    if task.has_deadline() {
        &task.deadline
    } else {
        NO_DEADLINE
    }
}

fn completed_text(task: &TaskRecord) -> &'static str {
    if task.is_completed {
        "はい"
    } else {
        "いいえ"
    }
}

/// Keep a task on one line: every line break becomes a single space.
fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

fn text_line(position: usize, task: &TaskRecord) -> String {
    format!(
        "{}, {}, 締切: {}, 完了: {}",
        position,
        single_line(&task.text),
        deadline_text(task),
        completed_text(task)
    )
}

fn csv_line(position: usize, task: &TaskRecord) -> String {
    format!(
        "{}, {}, 締切: {}, 完了: {}",
        position,
        csv_field(&task.text),
        deadline_text(task),
        completed_text(task)
    )
}

/// Quote per RFC 4180 when the value would otherwise break the row.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn paged(tasks: &[TaskRecord], page_lines: usize) -> String {
    let lines: Vec<String> =
        tasks.iter().enumerate().map(|(i, t)| text_line(i + 1, t)).collect();
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&lines[..]]
    } else {
        lines.chunks(page_lines).collect()
    };
    let page_count = chunks.len();

    let mut pages = Vec::with_capacity(page_count);
    for (index, chunk) in chunks.iter().enumerate() {
        let mut page = format!("Todo List (Page {}/{})\n\n", index + 1, page_count);
        if chunk.is_empty() {
            page.push_str("No tasks to do!\n");
        }
        for line in chunk.iter() {
            page.push_str(line);
            page.push('\n');
        }
        pages.push(page);
    }
    pages.join(PAGE_BREAK)
}
