//! Actions representing presentation commands for the host.
//!
//! This module defines the [`Action`] type, the imperative output of the event
//! handler. Actions bridge the pure state transitions in [`AppState`] and the
//! host's presentation layer: the core never renders, it only tells the host
//! which pane to bring into focus.
//!
//! [`AppState`]: crate::app::AppState

/// Commands for the host presentation layer.
///
/// Produced by [`handle_event`](crate::app::handle_event) alongside the
/// re-render flag and executed by the host in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Brings the detail pane for the given entry into focus.
    ///
    /// Emitted after a successful selection. In wide layouts where both panes
    /// are always visible the host may treat this as a hint only.
    FocusDetail {
        /// Id of the selected entry.
        id: String,
    },

    /// Returns focus to the item list.
    ///
    /// Emitted when the user navigates back from the detail pane.
    FocusList,
}
