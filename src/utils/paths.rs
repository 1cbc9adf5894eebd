//! Platform data directory lookup

use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "deadline-todo";

/// Root directory for per-user application data.
pub fn data_root_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    }
}

/// Default store directory, `<data root>/deadline-todo`.
pub fn default_data_dir() -> Option<PathBuf> {
    data_root_dir().map(|root| root.join(APP_DIR_NAME))
}
