//! Session-local view state and its transitions.
//!
//! Every transition is total: there is no invalid input and nothing to
//! report back. The fields are independent, so transitions commute except
//! that selecting a project always opens the detail panel.

use super::{compute_visible_projects, ProjectRecord, ProjectStatus, SortKey, ViewMode};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_query: String,
    /// Empty means no status filter is applied
    pub selected_statuses: HashSet<ProjectStatus>,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
    pub selected_project_id: Option<String>,
    pub detail_panel_open: bool,
    pub help_panel_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_status(&mut self, status: ProjectStatus) {
        if !self.selected_statuses.remove(&status) {
            self.selected_statuses.insert(status);
        }
    }

    pub fn clear_statuses(&mut self) {
        self.selected_statuses.clear();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn select_project(&mut self, id: impl Into<String>) {
        self.selected_project_id = Some(id.into());
        self.detail_panel_open = true;
    }

    /// The selected id is kept; only visibility changes.
    pub fn close_detail_panel(&mut self) {
        self.detail_panel_open = false;
    }

    /// Restore search, status filter, sort and view mode. Overlay flags are
    /// left as they are.
    pub fn reset_all(&mut self) {
        self.search_query.clear();
        self.selected_statuses.clear();
        self.sort_key = SortKey::default();
        self.view_mode = ViewMode::default();
    }

    pub fn toggle_help(&mut self) {
        self.help_panel_open = !self.help_panel_open;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.selected_statuses.is_empty() || !self.search_query.trim().is_empty()
    }

    /// Run the derived-view pipeline with this state's search, filter and sort.
    pub fn visible_projects<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        compute_visible_projects(
            records,
            &self.search_query,
            &self.selected_statuses,
            self.sort_key,
        )
    }

    /// Resolve the selected id against the store.
    pub fn selected_project<'a>(&self, records: &'a [ProjectRecord]) -> Option<&'a ProjectRecord> {
        let id = self.selected_project_id.as_deref()?;
        records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert!(state.search_query.is_empty());
        assert!(state.selected_statuses.is_empty());
        assert_eq!(state.sort_key, SortKey::Name);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(state.selected_project_id.is_none());
        assert!(!state.detail_panel_open);
        assert!(!state.help_panel_open);
    }

    #[test]
    fn test_toggle_status_twice_is_identity() {
        let mut state = ViewState::new();
        state.toggle_status(ProjectStatus::OnHold);
        assert!(state.selected_statuses.contains(&ProjectStatus::OnHold));
        state.toggle_status(ProjectStatus::OnHold);
        assert!(state.selected_statuses.is_empty());
    }

    #[test]
    fn test_search_query_stored_verbatim() {
        let mut state = ViewState::new();
        state.set_search_query("  Acme ");
        assert_eq!(state.search_query, "  Acme ");
    }

    #[test]
    fn test_select_then_close_keeps_id() {
        let mut state = ViewState::new();
        state.select_project("p-7");
        assert!(state.detail_panel_open);
        state.close_detail_panel();
        assert!(!state.detail_panel_open);
        assert_eq!(state.selected_project_id.as_deref(), Some("p-7"));
    }

    #[test]
    fn test_reset_leaves_panels_alone() {
        let mut state = ViewState::new();
        state.set_search_query("web");
        state.toggle_status(ProjectStatus::Completed);
        state.set_sort_key(SortKey::Progress);
        state.set_view_mode(ViewMode::List);
        state.select_project("p-1");
        state.toggle_help();

        state.reset_all();

        assert!(state.search_query.is_empty());
        assert!(state.selected_statuses.is_empty());
        assert_eq!(state.sort_key, SortKey::Name);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(state.detail_panel_open);
        assert!(state.help_panel_open);
        assert_eq!(state.selected_project_id.as_deref(), Some("p-1"));
    }

    #[test]
    fn test_has_active_filters() {
        let mut state = ViewState::new();
        assert!(!state.has_active_filters());
        state.set_search_query("   ");
        assert!(!state.has_active_filters());
        state.set_search_query("x");
        assert!(state.has_active_filters());
        state.set_search_query("");
        state.toggle_status(ProjectStatus::Active);
        assert!(state.has_active_filters());
    }
}
