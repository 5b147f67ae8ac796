//! Query layer: categories, health filters, and the visible-set engine.
//!
//! # Organization
//!
//! - [`category`]: Tagged-variant sidebar category and matching
//! - [`health`]: Health filter chips
//! - [`state`]: Mutable query configuration
//! - [`engine`]: Pure visible-set computation

pub mod category;
pub mod engine;
pub mod health;
pub mod state;

pub use category::Category;
pub use engine::{visible_entries, visible_entries_at};
pub use health::HealthFilter;
pub use state::{QueryState, DEFAULT_RECENT_WINDOW_DAYS};
