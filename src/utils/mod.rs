//! Shared helpers.

pub mod hashing;
pub mod paths;

pub use hashing::task_hash;
pub use paths::default_data_dir;

/// Share of `count` in `total` as a percentage; `0.0` for an empty total.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
