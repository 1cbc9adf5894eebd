//! Add command implementation

use anyhow::{bail, Result};
use clap::Args;

use super::utils::{GlobalArgs, Session};
use crate::config::CliOverrides;
use crate::mutate::duplicate_count_from;

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Deadline, e.g. '2024-01-01T09:00', '2024-01-01 09:00' or '2024-01-01'
    #[arg(short, long, value_name = "DATETIME")]
    pub deadline: Option<String>,

    /// Number of copies to create (zero or less adds nothing)
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1, allow_negative_numbers = true)]
    pub duplicate: i64,

    /// Days between the deadlines of consecutive copies
    #[arg(short = 'r', long, value_name = "DAYS", default_value_t = 0)]
    pub repeat_days: u32,
}

pub fn run(args: AddArgs, global: &GlobalArgs) -> Result<()> {
    if args.text.trim().is_empty() {
        bail!("Task text must not be empty");
    }

    let session = Session::open(global, CliOverrides::default())?;
    let count = duplicate_count_from(args.duplicate);
    if count == 0 {
        println!("No tasks added (copy count {} is not positive)", args.duplicate);
        return Ok(());
    }

    let new = session
        .new_task(&args.text)
        .deadline(args.deadline.unwrap_or_default())
        .duplicates(count)
        .repeat_every_days(args.repeat_days);

    let list = session.load()?;
    let (list, ids) = list.add(&new, session.now())?;
    session.save(&list)?;

    println!("Added {} task(s)", ids.len());
    for id in &ids {
        tracing::debug!(id = %id, "created");
    }
    Ok(())
}
