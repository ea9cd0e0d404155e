//! TUI rendering module.
//!
//! This module handles all UI rendering for the terminal interface.
//! It's organized into submodules for maintainability:
//!
//! - `icons` - Glyphs used throughout the UI
//! - `layout` - Layout calculations and text utilities
//! - `status` - Status configuration, status bar and help popup
//! - `dashboard` - Header, stats row, filter sidebar, project grid/list
//! - `modals` - Project detail panel
//! - `menus` - Menu rendering (sort, filter)

mod dashboard;
pub mod icons;
pub mod layout;
mod menus;
mod modals;
mod status;

pub use self::draw::draw;

mod draw {

    use super::dashboard::{draw_header, draw_projects, draw_sidebar, draw_stats};
    use super::menus::{draw_filter_menu, draw_sort_menu};
    use super::modals::draw_detail_panel;
    use super::status::{draw_help_popup, draw_status_bar};
    use crate::tui::App;
    use ratatui::{
        layout::{Constraint, Direction, Layout},
        Frame,
    };

    const SIDEBAR_WIDTH: u16 = 28;

    /// Main draw function - renders the entire TUI.
    pub fn draw(f: &mut Frame, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Stats
                Constraint::Min(0),    // Sidebar + projects
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[2]);

        draw_header(f, app, chunks[0]);
        draw_stats(f, app, chunks[1]);
        draw_sidebar(f, app, body[0]);
        draw_projects(f, app, body[1]);
        draw_status_bar(f, app, chunks[3]);

        // Overlays, bottom to top
        if app.show_sort_menu() {
            draw_sort_menu(f, app);
        }

        if app.show_filter_menu() {
            draw_filter_menu(f, app);
        }

        if app.show_detail() {
            draw_detail_panel(f, app);
        }

        if app.show_help() {
            draw_help_popup(f);
        }
    }
}
