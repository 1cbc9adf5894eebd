//! Stats command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::utils::{GlobalArgs, Session};
use crate::analysis::aggregate_with_window;
use crate::config::CliOverrides;
use crate::render::render_summary;

#[derive(Args)]
pub struct StatsArgs {
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatsArgs, global: &GlobalArgs) -> Result<()> {
    let session = Session::open(global, CliOverrides::default())?;
    let list = session.load()?;
    let now = session.now();
    let summary = aggregate_with_window(list.as_slice(), now, session.config.due_soon_window());

    if args.json {
        let report = json!({
            "now": now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(&summary, now));
    }
    Ok(())
}
