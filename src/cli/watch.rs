//! Watch command: periodic re-evaluation of deadline-dependent state.

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::ops::ControlFlow;

use super::utils::{GlobalArgs, Session};
use crate::analysis::aggregate_with_window;
use crate::clock::Ticker;
use crate::config::CliOverrides;
use crate::render::render_summary;

#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between ticks (at least 1)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Stop after this many ticks instead of running until interrupted
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,
}

pub fn run(args: WatchArgs, global: &GlobalArgs) -> Result<()> {
    let overrides =
        CliOverrides { tick_interval_secs: args.interval, ..CliOverrides::default() };
    let session = Session::open(global, overrides)?;

    // The collection is read once; ticks only move "now".
    let tasks = session.load()?.into_records();
    let clock = session.clock();
    let window = session.config.due_soon_window();
    let limit = args.ticks;

    let ticker = Ticker::spawn(
        session.config.tick_interval(),
        move |tick| {
            let now = clock.now();
            let summary = aggregate_with_window(&tasks, now, window);
            let mut stdout = std::io::stdout().lock();
            if tick > 0 {
                let _ = writeln!(stdout);
            }
            let _ = write!(stdout, "{}", render_summary(&summary, now));
            let _ = stdout.flush();

            match limit {
                Some(limit) if tick + 1 >= limit => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        },
    );
    let ticks = ticker.wait();
    tracing::debug!(ticks, "watch finished");
    Ok(())
}
