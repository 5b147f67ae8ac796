//! View model layer.
//!
//! Immutable, display-ready data computed from application state. No
//! rendering happens here; hosts consume [`VaultViewModel`] and draw it with
//! whatever toolkit they use.

pub mod viewmodel;

pub use viewmodel::{
    compute_viewmodel, DetailView, EmptyState, HeaderInfo, HealthDot, ListRow, SidebarCounts,
    VaultViewModel,
};
