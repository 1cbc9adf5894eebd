//! Shared CLI plumbing: global flags, store/config/clock setup, target lookup.

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::sorted_view;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, Deadline, StoreError, TaskId, TaskList, TaskRef};
use crate::mutate::NewTask;
use crate::store::{FileStore, TaskStore};
use crate::utils::default_data_dir;

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory holding the task store
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage key the task list is saved under
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Path to config file (deadline-todo.toml or .deadline-todo.yml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Evaluate deadlines against this time instead of the system clock
    #[arg(long, global = true, value_name = "DATETIME")]
    pub now: Option<String>,
}

/// Everything a command needs: merged config, the store and a clock.
pub struct Session {
    pub config: Config,
    pub store: TaskStore<FileStore>,
    clock: Arc<dyn Clock>,
}

impl Session {
    pub fn open(global: &GlobalArgs, mut overrides: CliOverrides) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let file_config = load_config(&cwd, global.config.as_deref())?;

        overrides.data_dir = global.data_dir.clone();
        overrides.storage_key = global.key.clone();
        let config = merge_cli_with_config(file_config, overrides);

        let data_dir = match config.data_dir.clone() {
            Some(dir) => dir,
            None => default_data_dir()
                .context("Could not determine a data directory; pass --data-dir")?,
        };
        let store = TaskStore::with_key(FileStore::new(data_dir), config.storage_key.clone());
        tracing::debug!(dir = %store.backend().dir().display(), key = store.key(), "opened store");

        let clock: Arc<dyn Clock> = match global.now.as_deref() {
            Some(raw) => match Deadline::parse(raw) {
                Some(fixed) => Arc::new(FixedClock(fixed.local())),
                None => bail!("Invalid --now value '{}'", raw),
            },
            None => Arc::new(SystemClock),
        };

        Ok(Self { config, store, clock })
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Malformed data starts an empty list; a store that cannot be read is an
    /// error, so a later save never replaces it.
    pub fn load(&self) -> Result<TaskList> {
        match self.store.try_load() {
            Ok(list) => Ok(list),
            Err(e @ StoreError::Parse { .. }) => {
                tracing::warn!("{}; starting with an empty task list", e);
                Ok(TaskList::new())
            }
            Err(e) => Err(e).context("Failed to load task list"),
        }
    }

    pub fn save(&self, list: &TaskList) -> Result<()> {
        self.store.save(list).context("Failed to save task list")
    }

    pub fn new_task(&self, text: &str) -> NewTask {
        NewTask::new(text).max_duplicates(self.config.max_duplicates)
    }
}

/// Interpret a user target: a 16-hex-digit id, or a 1-based position in the
/// sorted view as printed by `list`.
pub fn resolve_target(list: &TaskList, target: &str) -> Result<TaskRef> {
    if let Some(id) = TaskId::parse(target) {
        return Ok(TaskRef::Id(id));
    }
    let position: usize = target.trim().parse().with_context(|| {
        format!("Invalid task '{}': expected a list position or a task id", target)
    })?;
    let sorted = sorted_view(list.as_slice());
    if position == 0 || position > sorted.len() {
        bail!("No task at position {} (list has {} tasks)", position, sorted.len());
    }
    Ok(TaskRef::Id(sorted[position - 1].id.clone()))
}

pub fn is_interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
