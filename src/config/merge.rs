//! Apply command-line overrides on top of file configuration.

use std::path::PathBuf;

use crate::domain::{Config, ExportFormat};

/// Values given on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
    pub tick_interval_secs: Option<u64>,
    pub page_lines: Option<usize>,
    pub export_format: Option<ExportFormat>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(key) = cli.storage_key {
        config.storage_key = key;
    }
    if let Some(secs) = cli.tick_interval_secs {
        config.tick_interval_secs = secs;
    }
    if let Some(lines) = cli.page_lines {
        config.page_lines = lines;
    }
    if let Some(format) = cli.export_format {
        config.export_format = format;
    }
    config
}
