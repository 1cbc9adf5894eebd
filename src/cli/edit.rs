//! Commands that change a single task: toggle, delete, deadline.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

use super::utils::{is_interactive, resolve_target, GlobalArgs, Session};
use crate::config::CliOverrides;

const DEADLINE_PROMPT: &str =
    "締め切り日時が入力されていません。日時を入力してください（例：2023-12-31）";

#[derive(Args)]
pub struct TargetArgs {
    /// List position (as shown by `list`) or task id
    #[arg(value_name = "TASK")]
    pub target: String,
}

#[derive(Args)]
pub struct DeadlineArgs {
    /// List position (as shown by `list`) or task id
    #[arg(value_name = "TASK")]
    pub target: String,

    /// New deadline; prompted for when omitted in an interactive terminal
    #[arg(value_name = "DATETIME")]
    pub value: Option<String>,
}

pub fn run_toggle(args: TargetArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let list = session.load()?;
    let target = resolve_target(&list, &args.target)?;
    let list = list.toggle(target.clone())?;
    session.save(&list)?;

    if let Some(task) = list.get(&target) {
        let state = if task.is_completed { "completed" } else { "open" };
        println!("Marked '{}' as {}", task.text, state);
    }
    Ok(())
}

pub fn run_delete(args: TargetArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let list = session.load()?;
    let target = resolve_target(&list, &args.target)?;
    let text = list.get(&target).map(|t| t.text.clone()).unwrap_or_default();
    let list = list.delete(target)?;
    session.save(&list)?;

    println!("Deleted '{}'", text);
    Ok(())
}

pub fn run_deadline(args: DeadlineArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let list = session.load()?;
    let target = resolve_target(&list, &args.target)?;

    let value = match args.value.filter(|v| !v.trim().is_empty()) {
        Some(value) => value,
        None if is_interactive() => {
            let entered: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(DEADLINE_PROMPT)
                .allow_empty(true)
                .interact_text()?;
            if entered.trim().is_empty() {
                println!("Deadline unchanged");
                return Ok(());
            }
            entered
        }
        None => String::new(),
    };

    let list = list.set_deadline(target.clone(), &value)?;
    session.save(&list)?;

    if let Some(task) = list.get(&target) {
        println!("Deadline of '{}' set to {}", task.text, task.deadline);
    }
    Ok(())
}

pub fn run_clear_completed(global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let (list, removed) = session.load()?.clear_completed();
    if removed > 0 {
        session.save(&list)?;
    }
    println!("Removed {} completed task(s)", removed);
    Ok(())
}
