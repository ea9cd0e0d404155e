//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as messages.
//! This enables unidirectional data flow and testable update logic.

use crate::data::{ProjectStatus, SortKey, ViewMode};

/// All possible user actions in the application.
///
/// Messages are dispatched from key events and processed by the `App::update()` method.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the cursor up one row
    MoveUp,
    /// Move the cursor down one row
    MoveDown,
    /// Move the cursor one card left (grid view)
    MoveLeft,
    /// Move the cursor one card right (grid view)
    MoveRight,
    /// Jump to the first project
    GotoTop,
    /// Jump to the last project
    GotoBottom,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the search input
    EnterSearch,
    /// Leave the search input, keeping the query
    ConfirmSearch,
    /// Clear the query, or leave the input when it is already empty
    CancelSearch,
    /// Append a character to the query
    SearchInput(char),
    /// Remove the last character from the query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering and sorting
    // ─────────────────────────────────────────────────────────────────────────
    /// Add or remove a status from the filter set
    ToggleStatus(ProjectStatus),
    /// Remove every status filter
    ClearStatuses,
    /// Replace the sort key
    SetSortKey(SortKey),
    /// Cycle to the next sort key
    CycleSortKey,
    /// Restore search, filters, sort and view mode
    ResetAll,

    // ─────────────────────────────────────────────────────────────────────────
    // View
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between grid and list rendering
    SetViewMode(ViewMode),

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail panel for the project under the cursor
    OpenDetail,
    /// Close the detail panel
    CloseDetail,
    /// Toggle the keyboard shortcuts overlay
    ToggleHelp,
    /// Toggle the sort menu
    ToggleSortMenu,
    /// Toggle the filter menu
    ToggleFilterMenu,
    /// Close the open menu
    CloseMenu,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys)
    None,
}
