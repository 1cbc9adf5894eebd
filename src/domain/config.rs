//! Runtime configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{DEFAULT_MAX_DUPLICATES, DEFAULT_STORAGE_KEY};

/// Export document flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    #[serde(alias = "txt")]
    Text,
    Csv,
    Paged,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "paged" | "pages" => Some(Self::Paged),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Paged => "paged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the key-value store. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    pub tick_interval_secs: u64,
    /// Width of the "due soon" window.
    pub due_soon_hours: u32,
    pub max_duplicates: u32,
    /// Task lines per page in the paged export.
    pub page_lines: usize,
    pub export_format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            tick_interval_secs: 1,
            due_soon_hours: 24,
            max_duplicates: DEFAULT_MAX_DUPLICATES,
            page_lines: 40,
            export_format: ExportFormat::Text,
        }
    }
}

impl Config {
    pub fn due_soon_window(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.due_soon_hours))
    }

    /// Ticker period, never shorter than one second.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.tick_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_accepts_aliases() {
        assert_eq!(ExportFormat::parse("TXT"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("csv"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("paged"), Some(ExportFormat::Paged));
        assert_eq!(ExportFormat::parse("pdf"), None);
    }

    #[test]
    fn default_window_is_one_day() {
        assert_eq!(Config::default().due_soon_window().num_milliseconds(), 86_400_000);
    }

    #[test]
    fn zero_tick_interval_is_clamped() {
        let config = Config { tick_interval_secs: 0, ..Config::default() };
        assert_eq!(config.tick_interval(), std::time::Duration::from_secs(1));
        let config = Config { tick_interval_secs: 5, ..Config::default() };
        assert_eq!(config.tick_interval(), std::time::Duration::from_secs(5));
    }
}
