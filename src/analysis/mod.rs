//! Pure derivations over a task list and a reference time.
//!
//! Nothing here is stored: counts, percentages and urgency are recomputed
//! from the collection every time they are needed.

pub mod summary;
pub mod urgency;
pub mod view;

pub use summary::{aggregate, aggregate_with_window, Summary};
pub use urgency::{
    classify, classify_with_window, is_due_today, is_due_within, is_due_within_24h, is_overdue,
    Urgency, DUE_SOON_WINDOW_MS,
};
pub use view::sorted_view;
