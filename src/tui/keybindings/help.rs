//! Auto-generate help text from the keybindings registry.

use super::registry::BINDINGS;
use super::{Category, Mode};

/// Generate compact footer hints for a given mode.
/// Returns a string like "j/k: nav | /: search | Esc: back"
pub fn generate_footer_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "  j/k: nav | o: details | /: search | f: filter | s: sort | ?: help",
        Mode::Search => "  Enter: confirm | Esc: clear/cancel",
        Mode::Detail => "  Esc: close | ?: help",
        Mode::Help => "  Esc: close",
        Mode::SortMenu => "  1-3: select | Esc: close",
        Mode::FilterMenu => "  1-3: toggle | c: clear | Esc: close",
    }
}

/// Generate the keyboard shortcuts overlay, grouped by category.
///
/// Only dashboard-level bindings are listed; the per-overlay keys are
/// covered by the footer hints.
pub fn generate_keyboard_shortcuts() -> Vec<String> {
    let mut lines = vec![String::new()];

    for category in Category::all() {
        let rows: Vec<String> = BINDINGS
            .iter()
            .map(|b| &b.key)
            .filter(|b| b.show_in_help && b.category == category)
            .filter(|b| b.modes.contains(&Mode::Normal))
            .map(|b| format!("  {:14}{}", b.keys_display(), b.description))
            .collect();

        if rows.is_empty() {
            continue;
        }

        lines.push(format!("  {}", category.label()));
        lines.push(format!("  {}", "─".repeat(category.label().len())));
        lines.extend(rows);
        lines.push(String::new());
    }

    lines
}
