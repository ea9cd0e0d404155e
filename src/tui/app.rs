use crate::config::Config;
use crate::data::{
    compute_aggregate_stats, dates, AggregateStats, ProjectRecord, ProjectStatus, RecordStore,
    SortKey, ViewMode, ViewState,
};
use chrono::NaiveDate;

/// Menu popups owned by the terminal UI. The help and detail overlays live in
/// [`ViewState`] instead since they are part of the dashboard's state model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    None,
    Sort,
    Filter,
}

pub struct App {
    pub config: Config,
    pub store: RecordStore,
    pub view: ViewState,
    /// Store positions of the visible projects, in display order
    pub visible: Vec<usize>,
    /// Cursor position within `visible`
    pub cursor: usize,
    pub menu: Menu,
    pub search_mode: bool,
    /// Reference date for days-remaining and overdue labels
    pub today: NaiveDate,
    pub stats: AggregateStats,
}

impl App {
    pub fn new(config: Config, store: RecordStore) -> Self {
        let stats = compute_aggregate_stats(store.records());
        let mut app = Self {
            config,
            store,
            view: ViewState::new(),
            visible: Vec::new(),
            cursor: 0,
            menu: Menu::None,
            search_mode: false,
            today: dates::today(),
            stats,
        };
        app.apply_filters();
        app
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `true` if the app should quit.
    pub fn update(&mut self, msg: super::Message) -> bool {
        use super::Message;
        match msg {
            // ─────────────────────────────────────────────────────────────────
            // App lifecycle
            // ─────────────────────────────────────────────────────────────────
            Message::Quit => return true,

            // ─────────────────────────────────────────────────────────────────
            // Cursor navigation
            // ─────────────────────────────────────────────────────────────────
            Message::MoveUp => self.move_cursor(-(self.row_stride() as isize)),
            Message::MoveDown => self.move_cursor(self.row_stride() as isize),
            Message::MoveLeft => {
                if self.view.view_mode == ViewMode::Grid {
                    self.move_cursor(-1);
                }
            }
            Message::MoveRight => {
                if self.view.view_mode == ViewMode::Grid {
                    self.move_cursor(1);
                }
            }
            Message::GotoTop => self.cursor = 0,
            Message::GotoBottom => self.cursor = self.visible.len().saturating_sub(1),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Message::EnterSearch => {
                self.menu = Menu::None;
                self.search_mode = true;
            }
            Message::ConfirmSearch => self.search_mode = false,
            Message::CancelSearch => {
                if self.view.search_query.is_empty() {
                    self.search_mode = false;
                } else {
                    self.set_search_query(String::new());
                }
            }
            Message::SearchInput(c) => {
                let mut query = self.view.search_query.clone();
                query.push(c);
                self.set_search_query(query);
            }
            Message::SearchBackspace => {
                let mut query = self.view.search_query.clone();
                query.pop();
                self.set_search_query(query);
            }

            // ─────────────────────────────────────────────────────────────────
            // Filtering and sorting
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleStatus(status) => self.toggle_status(status),
            Message::ClearStatuses => {
                self.view.clear_statuses();
                self.apply_filters();
            }
            Message::SetSortKey(key) => self.set_sort_key(key),
            Message::CycleSortKey => self.set_sort_key(self.view.sort_key.next()),
            Message::ResetAll => self.reset_all(),

            // ─────────────────────────────────────────────────────────────────
            // View
            // ─────────────────────────────────────────────────────────────────
            Message::SetViewMode(mode) => self.view.set_view_mode(mode),

            // ─────────────────────────────────────────────────────────────────
            // Overlays
            // ─────────────────────────────────────────────────────────────────
            Message::OpenDetail => self.open_detail(),
            Message::CloseDetail => self.view.close_detail_panel(),
            Message::ToggleHelp => self.view.toggle_help(),
            Message::ToggleSortMenu => self.toggle_menu(Menu::Sort),
            Message::ToggleFilterMenu => self.toggle_menu(Menu::Filter),
            Message::CloseMenu => self.menu = Menu::None,

            Message::None => {}
        }
        false
    }

    /// Refresh the reference date so labels roll over at midnight UTC.
    pub fn on_tick(&mut self) {
        let today = dates::today();
        if today != self.today {
            tracing::debug!("Date changed to {}", today);
            self.today = today;
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        self.store.records()
    }

    /// Visible projects in display order
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        let records = self.store.records();
        self.visible.iter().map(|&i| &records[i]).collect()
    }

    pub fn cursor_project(&self) -> Option<&ProjectRecord> {
        let idx = *self.visible.get(self.cursor)?;
        self.store.records().get(idx)
    }

    /// Project shown in the detail panel, if the panel is open
    pub fn detail_project(&self) -> Option<&ProjectRecord> {
        if !self.view.detail_panel_open {
            return None;
        }
        self.view.selected_project(self.store.records())
    }

    pub fn grid_columns(&self) -> usize {
        self.config.ui.grid_columns()
    }

    fn row_stride(&self) -> usize {
        match self.view.view_mode {
            ViewMode::Grid => self.grid_columns(),
            ViewMode::List => 1,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.cursor = 0;
            return;
        }
        // Clamp instead of wrapping
        let last = self.visible.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    pub fn set_search_query(&mut self, query: String) {
        self.view.set_search_query(query);
        self.apply_filters();
    }

    pub fn toggle_status(&mut self, status: ProjectStatus) {
        self.view.toggle_status(status);
        self.apply_filters();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.view.set_sort_key(key);
        self.menu = Menu::None;
        self.apply_filters();
    }

    pub fn reset_all(&mut self) {
        tracing::debug!("Resetting filters and view");
        self.view.reset_all();
        self.search_mode = false;
        self.apply_filters();
    }

    pub fn open_detail(&mut self) {
        if let Some(id) = self.cursor_project().map(|p| p.id.clone()) {
            self.view.select_project(id);
        }
    }

    fn toggle_menu(&mut self, menu: Menu) {
        self.menu = if self.menu == menu { Menu::None } else { menu };
    }

    /// Recompute the visible list from the current view state, keeping the
    /// cursor on the same project when it survives the change.
    pub fn apply_filters(&mut self) {
        let previous = self.cursor_project().map(|p| p.id.clone());

        let store = &self.store;
        self.visible = self
            .view
            .visible_projects(store.records())
            .into_iter()
            .filter_map(|p| store.position(&p.id))
            .collect();

        self.cursor = previous
            .and_then(|id| {
                self.visible
                    .iter()
                    .position(|&i| self.store.records()[i].id == id)
            })
            .unwrap_or(0)
            .min(self.visible.len().saturating_sub(1));
    }

    pub fn has_active_filters(&self) -> bool {
        self.view.has_active_filters()
    }

    pub fn show_sort_menu(&self) -> bool {
        self.menu == Menu::Sort
    }

    pub fn show_filter_menu(&self) -> bool {
        self.menu == Menu::Filter
    }

    pub fn show_help(&self) -> bool {
        self.view.help_panel_open
    }

    pub fn show_detail(&self) -> bool {
        self.detail_project().is_some()
    }
}
