//! Tests for App::update: cursor movement, search editing, overlays and the
//! cached visible list.

mod test_utils;

use projboard::data::{ProjectStatus, SortKey, ViewMode};
use projboard::tui::{App, Menu, Message};
use test_utils::{app_with, sample_app};

fn cursor_id(app: &App) -> Option<String> {
    app.cursor_project().map(|p| p.id.clone())
}

fn type_query(app: &mut App, text: &str) {
    for c in text.chars() {
        app.update(Message::SearchInput(c));
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_quit_returns_true() {
    let mut app = sample_app();
    assert!(app.update(Message::Quit));
    assert!(!app.update(Message::None));
}

#[test]
fn test_initial_state() {
    let app = sample_app();
    assert_eq!(app.visible.len(), 6);
    assert_eq!(app.cursor, 0);
    // First project in name order
    assert_eq!(cursor_id(&app).as_deref(), Some("p4"));
    assert_eq!(app.stats.active_count, 3);
}

// ============================================================================
// Cursor navigation
// ============================================================================

#[test]
fn test_grid_moves_by_row_and_column() {
    let mut app = sample_app();
    assert_eq!(app.view.view_mode, ViewMode::Grid);
    assert_eq!(app.grid_columns(), 3);

    app.update(Message::MoveDown);
    assert_eq!(app.cursor, 3);
    app.update(Message::MoveRight);
    assert_eq!(app.cursor, 4);
    app.update(Message::MoveDown);
    assert_eq!(app.cursor, 5, "clamped to the last project");
    app.update(Message::MoveUp);
    assert_eq!(app.cursor, 2);
    app.update(Message::MoveLeft);
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_list_moves_one_row() {
    let mut app = sample_app();
    app.update(Message::SetViewMode(ViewMode::List));

    app.update(Message::MoveDown);
    assert_eq!(app.cursor, 1);
    app.update(Message::MoveRight);
    assert_eq!(app.cursor, 1, "left/right do nothing in list view");
    app.update(Message::MoveUp);
    app.update(Message::MoveUp);
    assert_eq!(app.cursor, 0, "clamped at the top");
}

#[test]
fn test_goto_top_and_bottom() {
    let mut app = sample_app();
    app.update(Message::GotoBottom);
    assert_eq!(app.cursor, 5);
    app.update(Message::GotoTop);
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_cursor_follows_project_across_resort() {
    let mut app = sample_app();
    app.update(Message::GotoBottom);
    assert_eq!(cursor_id(&app).as_deref(), Some("p1"));

    app.update(Message::SetSortKey(SortKey::Progress));
    assert_eq!(cursor_id(&app).as_deref(), Some("p1"));
    assert_eq!(app.cursor, 2);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_typing_filters_live() {
    let mut app = sample_app();
    app.update(Message::EnterSearch);
    assert!(app.search_mode);

    type_query(&mut app, "acme");
    assert_eq!(app.view.search_query, "acme");
    assert_eq!(app.visible.len(), 2);

    app.update(Message::SearchBackspace);
    assert_eq!(app.view.search_query, "acm");
    assert_eq!(app.visible.len(), 2);

    app.update(Message::ConfirmSearch);
    assert!(!app.search_mode);
    assert_eq!(app.view.search_query, "acm", "confirm keeps the query");
}

#[test]
fn test_escape_clears_then_leaves_search() {
    let mut app = sample_app();
    app.update(Message::EnterSearch);
    type_query(&mut app, "beta");
    assert_eq!(app.visible.len(), 2);

    app.update(Message::CancelSearch);
    assert_eq!(app.view.search_query, "");
    assert!(app.search_mode, "first Esc only clears the text");
    assert_eq!(app.visible.len(), 6);

    app.update(Message::CancelSearch);
    assert!(!app.search_mode);
}

#[test]
fn test_no_match_leaves_cursor_at_zero() {
    let mut app = sample_app();
    app.update(Message::GotoBottom);
    app.update(Message::EnterSearch);
    type_query(&mut app, "zzz");

    assert!(app.visible.is_empty());
    assert_eq!(app.cursor, 0);
    assert!(app.cursor_project().is_none());
    app.update(Message::MoveDown);
    assert_eq!(app.cursor, 0);
}

// ============================================================================
// Filtering and sorting
// ============================================================================

#[test]
fn test_toggle_and_clear_status() {
    let mut app = sample_app();
    app.update(Message::ToggleStatus(ProjectStatus::Completed));
    assert_eq!(app.visible.len(), 2);
    assert!(app.has_active_filters());

    app.update(Message::ToggleStatus(ProjectStatus::OnHold));
    assert_eq!(app.visible.len(), 3);

    app.update(Message::ClearStatuses);
    assert_eq!(app.visible.len(), 6);
    assert!(!app.has_active_filters());
}

#[test]
fn test_sort_menu_selection_closes_menu() {
    let mut app = sample_app();
    app.update(Message::ToggleSortMenu);
    assert_eq!(app.menu, Menu::Sort);

    app.update(Message::SetSortKey(SortKey::Deadline));
    assert_eq!(app.menu, Menu::None);
    assert_eq!(app.view.sort_key, SortKey::Deadline);
    assert_eq!(cursor_id(&app).as_deref(), Some("p4"));
    assert_eq!(app.visible_projects()[0].id, "p6");
}

#[test]
fn test_cycle_sort_key() {
    let mut app = sample_app();
    app.update(Message::CycleSortKey);
    assert_eq!(app.view.sort_key, SortKey::Deadline);
    app.update(Message::CycleSortKey);
    assert_eq!(app.view.sort_key, SortKey::Progress);
    app.update(Message::CycleSortKey);
    assert_eq!(app.view.sort_key, SortKey::Name);
}

#[test]
fn test_menus_toggle_and_replace_each_other() {
    let mut app = sample_app();
    app.update(Message::ToggleFilterMenu);
    assert!(app.show_filter_menu());
    app.update(Message::ToggleSortMenu);
    assert!(app.show_sort_menu());
    assert!(!app.show_filter_menu());
    app.update(Message::ToggleSortMenu);
    assert_eq!(app.menu, Menu::None);
}

#[test]
fn test_reset_all() {
    let mut app = sample_app();
    app.update(Message::EnterSearch);
    type_query(&mut app, "acme");
    app.update(Message::ToggleStatus(ProjectStatus::Active));
    app.update(Message::SetSortKey(SortKey::Progress));
    app.update(Message::SetViewMode(ViewMode::List));

    app.update(Message::ResetAll);

    assert!(!app.search_mode);
    assert_eq!(app.view.search_query, "");
    assert!(app.view.selected_statuses.is_empty());
    assert_eq!(app.view.sort_key, SortKey::Name);
    assert_eq!(app.view.view_mode, ViewMode::Grid);
    assert_eq!(app.visible.len(), 6);
}

// ============================================================================
// Overlays
// ============================================================================

#[test]
fn test_reset_leaves_open_overlays_alone() {
    let mut app = sample_app();
    app.update(Message::ToggleStatus(ProjectStatus::Active));
    app.update(Message::ToggleFilterMenu);
    assert_eq!(app.visible.len(), 3);

    app.update(Message::ResetAll);

    assert!(app.view.selected_statuses.is_empty());
    assert_eq!(app.visible.len(), 6);
    assert!(app.show_filter_menu());
}

#[test]
fn test_open_and_close_detail() {
    let mut app = sample_app();
    app.update(Message::MoveRight);
    app.update(Message::OpenDetail);

    assert!(app.show_detail());
    assert_eq!(
        app.detail_project().map(|p| p.name.as_str()),
        Some("Brand Refresh")
    );

    app.update(Message::CloseDetail);
    assert!(!app.show_detail());
    assert!(app.detail_project().is_none());
    assert_eq!(app.view.selected_project_id.as_deref(), Some("p5"));
}

#[test]
fn test_detail_survives_filter_hiding_project() {
    let mut app = sample_app();
    app.update(Message::OpenDetail);
    app.update(Message::ToggleStatus(ProjectStatus::Completed));
    // The detail panel resolves against the store, not the visible list
    assert_eq!(app.detail_project().map(|p| p.id.as_str()), Some("p4"));
}

#[test]
fn test_toggle_help() {
    let mut app = sample_app();
    app.update(Message::ToggleHelp);
    assert!(app.show_help());
    app.update(Message::ToggleHelp);
    assert!(!app.show_help());
}

// ============================================================================
// Empty store
// ============================================================================

#[test]
fn test_empty_store_is_inert() {
    let mut app = app_with(Vec::new());
    assert!(app.visible.is_empty());
    assert_eq!(app.stats.average_completion, 0);

    for msg in [
        Message::MoveDown,
        Message::MoveRight,
        Message::GotoBottom,
        Message::OpenDetail,
        Message::ResetAll,
    ] {
        assert!(!app.update(msg));
    }
    assert_eq!(app.cursor, 0);
    assert!(!app.show_detail());
}
