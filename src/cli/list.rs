//! List command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::utils::{GlobalArgs, Session};
use crate::analysis::{classify_with_window, sorted_view};
use crate::config::CliOverrides;
use crate::render::{render_listing, ListingOptions};

#[derive(Args)]
pub struct ListArgs {
    /// Show task ids next to each row
    #[arg(long)]
    pub ids: bool,

    /// Print the sorted view as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let list = session.load()?;
    let now = session.now();
    let window = session.config.due_soon_window();

    if args.json {
        let rows = sorted_view(list.as_slice())
            .iter()
            .enumerate()
            .map(|(index, task)| {
                json!({
                    "position": index + 1,
                    "id": task.id,
                    "text": task.text,
                    "isCompleted": task.is_completed,
                    "deadline": task.deadline,
                    "urgency": classify_with_window(task, now, window).as_str(),
                })
            })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let options = ListingOptions { now, due_soon_window: window, show_ids: args.ids };
    print!("{}", render_listing(list.as_slice(), &options));
    Ok(())
}
