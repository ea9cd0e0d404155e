//! Dispatch logic using the keybindings registry.
//!
//! This module provides the main dispatch function that matches key events
//! against the registry and returns appropriate messages.

use super::registry::BINDINGS;
use super::{KeyPattern, Mode};
use crate::tui::{App, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Determine the current mode from app state.
///
/// Overlays are layered, so the topmost one wins: the search input, then
/// help, then the detail panel, then the menus.
pub fn current_mode(app: &App) -> Mode {
    if app.search_mode {
        Mode::Search
    } else if app.show_help() {
        Mode::Help
    } else if app.show_detail() {
        Mode::Detail
    } else if app.show_sort_menu() {
        Mode::SortMenu
    } else if app.show_filter_menu() {
        Mode::FilterMenu
    } else {
        Mode::Normal
    }
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, key: KeyEvent) -> Message {
    let mode = current_mode(app);

    if let Some(msg) = lookup(mode, &key) {
        return msg;
    }

    // Text input modes take any plain character that has no binding
    if mode.is_text_input() {
        return dispatch_text_input(&key);
    }

    Message::None
}

fn dispatch_text_input(key: &KeyEvent) -> Message {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Message::SearchInput(c)
        }
        _ => Message::None,
    }
}

/// First binding in the registry that applies to `mode` and matches `key`.
fn lookup(mode: Mode, key: &KeyEvent) -> Option<Message> {
    BINDINGS
        .iter()
        .filter(|b| b.key.modes.contains(&mode))
        .find(|b| {
            matches_pattern(&b.key.pattern, key)
                || b.key.alternatives.iter().any(|alt| matches_pattern(alt, key))
        })
        .map(|b| b.action.clone())
}

/// Check if a key event matches a pattern.
fn matches_pattern(pattern: &KeyPattern, key: &KeyEvent) -> bool {
    match pattern {
        KeyPattern::Single(code) => {
            if key.code != *code {
                return false;
            }
            if key.modifiers.is_empty() {
                return true;
            }
            // Allow SHIFT modifier for uppercase letters and shifted symbols
            if key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c);
                }
            }
            false
        }
        KeyPattern::WithModifier { key: code, mods } => {
            key.code == *code && key.modifiers == *mods
        }
    }
}
