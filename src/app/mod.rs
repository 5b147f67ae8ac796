//! Application layer: selection controller and event handling.
//!
//! This module hosts the session state machine. [`AppState`] owns the catalog
//! and query configuration and enforces the selection invariant; the
//! [`handler`] translates host events into state transitions and
//! [`Action`] presentation commands.
//!
//! # Organization
//!
//! - [`state`]: Central state container and selection controller
//! - [`modes`]: Presentation mode for the master/detail layout
//! - [`handler`]: Event processing
//! - [`actions`]: Presentation commands returned to the host

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::PresentationMode;
pub use state::AppState;
