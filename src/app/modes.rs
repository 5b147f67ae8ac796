//! Presentation mode state for the master/detail layout.
//!
//! In constrained-width presentation contexts the console shows either the
//! item list or the item detail pane, never both. The mode is part of the
//! selection controller's state machine: selecting an entry focuses the
//! detail pane, navigating back returns to the list.

/// Which of the two mutually exclusive panes is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// The item list is focused. The initial mode.
    #[default]
    ListFocused,

    /// The detail pane for the selected entry is focused.
    ///
    /// Entered by a successful selection; left via `navigate_back`, which
    /// preserves the selection so the detail remains addressable.
    DetailFocused,
}
