//! Command-line interface for deadline-todo
//!
//! Plays the presentation role: every command loads the task list, applies
//! one mutation or derivation, and writes the list back when it changed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod add;
mod edit;
mod export;
mod list;
mod stats;
mod utils;
mod watch;

pub use utils::GlobalArgs;

/// Keep a to-do list with deadlines, urgency warnings and exports
#[derive(Parser)]
#[command(name = "deadline-todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task, optionally repeated over several days
    Add(add::AddArgs),

    /// Show the task list sorted by deadline
    List(list::ListArgs),

    /// Mark a task complete, or open again
    Toggle(edit::TargetArgs),

    /// Delete a task
    Delete(edit::TargetArgs),

    /// Change a task's deadline
    Deadline(edit::DeadlineArgs),

    /// Delete every completed task
    ClearCompleted,

    /// Show overdue and due-today counts
    Stats(stats::StatsArgs),

    /// Export the task list as text, CSV or a paged document
    Export(export::ExportArgs),

    /// Re-evaluate deadlines on a timer and print the summary on each tick
    Watch(watch::WatchArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let global = cli.global;
    match cli.command {
        Commands::Add(args) => add::run(args, &global),
        Commands::List(args) => list::run(args, &global),
        Commands::Toggle(args) => edit::run_toggle(args, &global),
        Commands::Delete(args) => edit::run_delete(args, &global),
        Commands::Deadline(args) => edit::run_deadline(args, &global),
        Commands::ClearCompleted => edit::run_clear_completed(&global),
        Commands::Stats(args) => stats::run(args, &global),
        Commands::Export(args) => export::run(args, &global),
        Commands::Watch(args) => watch::run(args, &global),
    }
}
