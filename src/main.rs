//! deadline-todo: keep a to-do list with deadlines from the terminal
//!
//! Tasks are stored as a JSON list in the user's data directory. Deadlines
//! are checked against the clock to flag overdue and due-today work.

use anyhow::Result;

fn main() -> Result<()> {
    deadline_todo::cli::run()
}
