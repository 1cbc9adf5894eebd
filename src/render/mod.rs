//! Output rendering (terminal listing, export documents)

pub mod export;
pub mod listing;

pub use export::render_export;
pub use listing::{render_listing, render_summary, ListingOptions};
