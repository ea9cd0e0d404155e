//! Centralized keybindings system.
//!
//! This module provides a single source of truth for all keybindings in the application.
//! The registry defines all bindings, and dispatch/help generation are derived from it.

mod dispatch;
mod help;
mod registry;

pub use dispatch::{current_mode, dispatch};
pub use help::{generate_footer_hints, generate_keyboard_shortcuts};
pub use registry::{Binding, BINDINGS};

use crossterm::event::{KeyCode, KeyModifiers};

/// All contexts where keybindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Main dashboard
    Normal,
    /// Typing in the search box
    Search,
    /// Project detail overlay
    Detail,
    /// Keyboard shortcuts overlay
    Help,
    /// Sort menu popup
    SortMenu,
    /// Status filter popup
    FilterMenu,
}

impl Mode {
    /// Returns true if this mode accepts text input (chars are not dispatched as commands).
    pub fn is_text_input(&self) -> bool {
        matches!(self, Mode::Search)
    }
}

/// Categories for grouping bindings in help display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Filtering,
    View,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Filtering => "Filtering",
            Category::View => "View",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Category::Navigation, Category::Filtering, Category::View].into_iter()
    }
}

/// Pattern for matching key events.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    /// Single key without modifiers (e.g., 'j', Enter, Esc)
    Single(KeyCode),
    /// Key with modifiers (e.g., Ctrl+r)
    WithModifier { key: KeyCode, mods: KeyModifiers },
}

impl KeyPattern {
    /// Format this pattern for display in help text.
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Single(code) => format_keycode(code),
            KeyPattern::WithModifier { key, mods } => {
                let mut result = String::new();
                if mods.contains(KeyModifiers::CONTROL) {
                    result.push_str("Ctrl+");
                }
                if mods.contains(KeyModifiers::SUPER) {
                    result.push_str("Cmd+");
                }
                if mods.contains(KeyModifiers::ALT) {
                    result.push_str("Alt+");
                }
                result.push_str(&format_keycode(key).to_uppercase());
                result
            }
        }
    }
}

/// Format a KeyCode for display.
fn format_keycode(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", code),
    }
}

/// A complete keybinding definition.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Modes where this binding applies
    pub modes: &'static [Mode],
    /// The key pattern to match
    pub pattern: KeyPattern,
    /// Human-readable description for help text
    pub description: &'static str,
    /// Category for grouping in help
    pub category: Category,
    /// Alternative key patterns (e.g., j and Down for same action)
    pub alternatives: &'static [KeyPattern],
    /// Whether to show this binding in help (false for internal bindings)
    pub show_in_help: bool,
}

impl KeyBinding {
    /// Primary and alternative keys joined for display, e.g. `j, ↓`.
    pub fn keys_display(&self) -> String {
        let mut parts = vec![self.pattern.display()];
        for alt in self.alternatives {
            parts.push(alt.display());
        }
        parts.join(", ")
    }
}
