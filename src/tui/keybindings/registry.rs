//! Static registry of all keybindings.
//!
//! This is THE SINGLE SOURCE OF TRUTH for all keybindings in the application.
//! Both dispatch logic and help generation derive from this registry.

use super::{Category, KeyBinding, KeyPattern, Mode};
use crate::data::{ProjectStatus, SortKey, ViewMode};
use crate::tui::Message;
use crossterm::event::{KeyCode, KeyModifiers};

/// A binding paired with the message it produces.
pub struct Binding {
    pub key: KeyBinding,
    pub action: Message,
}

const CTRL_R: KeyPattern = KeyPattern::WithModifier {
    key: KeyCode::Char('r'),
    mods: KeyModifiers::CONTROL,
};
const CMD_R: KeyPattern = KeyPattern::WithModifier {
    key: KeyCode::Char('r'),
    mods: KeyModifiers::SUPER,
};
const CTRL_C: KeyPattern = KeyPattern::WithModifier {
    key: KeyCode::Char('c'),
    mods: KeyModifiers::CONTROL,
};

/// All keybindings in the application.
///
/// Bindings are organized by mode and category. The dispatch system
/// searches this list in order and takes the first match, so mode-specific
/// bindings must come before broader ones sharing a key.
pub static BINDINGS: &[Binding] = &[
    // ═══════════════════════════════════════════════════════════════════════════
    // GLOBAL
    // ═══════════════════════════════════════════════════════════════════════════
    Binding {
        key: KeyBinding {
            modes: &[
                Mode::Normal,
                Mode::Search,
                Mode::Detail,
                Mode::Help,
                Mode::SortMenu,
                Mode::FilterMenu,
            ],
            pattern: CTRL_R,
            description: "Reset all filters",
            category: Category::Filtering,
            alternatives: &[CMD_R],
            show_in_help: true,
        },
        action: Message::ResetAll,
    },
    Binding {
        key: KeyBinding {
            modes: &[
                Mode::Normal,
                Mode::Search,
                Mode::Detail,
                Mode::Help,
                Mode::SortMenu,
                Mode::FilterMenu,
            ],
            pattern: CTRL_C,
            description: "Quit",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::Quit,
    },
    // ═══════════════════════════════════════════════════════════════════════════
    // NORMAL MODE
    // ═══════════════════════════════════════════════════════════════════════════

    // Navigation
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('j')),
            description: "Move down",
            category: Category::Navigation,
            alternatives: &[KeyPattern::Single(KeyCode::Down)],
            show_in_help: true,
        },
        action: Message::MoveDown,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('k')),
            description: "Move up",
            category: Category::Navigation,
            alternatives: &[KeyPattern::Single(KeyCode::Up)],
            show_in_help: true,
        },
        action: Message::MoveUp,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Left),
            description: "Previous card (grid)",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::MoveLeft,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Right),
            description: "Next card (grid)",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::MoveRight,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Home),
            description: "Go to first project",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::GotoTop,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::End),
            description: "Go to last project",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::GotoBottom,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Enter),
            description: "Open project details",
            category: Category::Navigation,
            alternatives: &[KeyPattern::Single(KeyCode::Char('o'))],
            show_in_help: true,
        },
        action: Message::OpenDetail,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::WithModifier {
                key: KeyCode::Char('k'),
                mods: KeyModifiers::CONTROL,
            },
            description: "Focus search box",
            category: Category::Navigation,
            alternatives: &[KeyPattern::Single(KeyCode::Char('/'))],
            show_in_help: true,
        },
        action: Message::EnterSearch,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Close modal or clear search",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::CancelSearch,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('q')),
            description: "Quit",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::Quit,
    },
    // Filtering
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal, Mode::FilterMenu],
            pattern: KeyPattern::Single(KeyCode::Char('1')),
            description: "Toggle Active filter",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleStatus(ProjectStatus::Active),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal, Mode::FilterMenu],
            pattern: KeyPattern::Single(KeyCode::Char('2')),
            description: "Toggle On Hold filter",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleStatus(ProjectStatus::OnHold),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal, Mode::FilterMenu],
            pattern: KeyPattern::Single(KeyCode::Char('3')),
            description: "Toggle Completed filter",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleStatus(ProjectStatus::Completed),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('x')),
            description: "Clear status filters",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ClearStatuses,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('f')),
            description: "Open filter menu",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleFilterMenu,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('s')),
            description: "Open sort menu",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleSortMenu,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Tab),
            description: "Cycle sort order",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::CycleSortKey,
    },
    // View
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('g')),
            description: "Switch to grid view",
            category: Category::View,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::SetViewMode(ViewMode::Grid),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal],
            pattern: KeyPattern::Single(KeyCode::Char('l')),
            description: "Switch to list view",
            category: Category::View,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::SetViewMode(ViewMode::List),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Normal, Mode::Detail],
            pattern: KeyPattern::Single(KeyCode::Char('?')),
            description: "Toggle keyboard shortcuts",
            category: Category::View,
            alternatives: &[],
            show_in_help: true,
        },
        action: Message::ToggleHelp,
    },
    // ═══════════════════════════════════════════════════════════════════════════
    // SEARCH MODE (printable characters are handled as text input)
    // ═══════════════════════════════════════════════════════════════════════════
    Binding {
        key: KeyBinding {
            modes: &[Mode::Search],
            pattern: KeyPattern::Single(KeyCode::Enter),
            description: "Confirm search",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::ConfirmSearch,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Search],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Clear search, then leave it",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::CancelSearch,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Search],
            pattern: KeyPattern::Single(KeyCode::Backspace),
            description: "Delete character",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::SearchBackspace,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Search],
            pattern: KeyPattern::Single(KeyCode::Down),
            description: "Move down",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::MoveDown,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Search],
            pattern: KeyPattern::Single(KeyCode::Up),
            description: "Move up",
            category: Category::Navigation,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::MoveUp,
    },
    // ═══════════════════════════════════════════════════════════════════════════
    // OVERLAYS
    // ═══════════════════════════════════════════════════════════════════════════
    Binding {
        key: KeyBinding {
            modes: &[Mode::Help],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Close help",
            category: Category::View,
            alternatives: &[
                KeyPattern::Single(KeyCode::Char('?')),
                KeyPattern::Single(KeyCode::Char('q')),
            ],
            show_in_help: false,
        },
        action: Message::ToggleHelp,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::Detail],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Close details",
            category: Category::Navigation,
            alternatives: &[
                KeyPattern::Single(KeyCode::Char('q')),
                KeyPattern::Single(KeyCode::Enter),
            ],
            show_in_help: false,
        },
        action: Message::CloseDetail,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::SortMenu],
            pattern: KeyPattern::Single(KeyCode::Char('1')),
            description: "Sort by name",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::SetSortKey(SortKey::Name),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::SortMenu],
            pattern: KeyPattern::Single(KeyCode::Char('2')),
            description: "Sort by deadline",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::SetSortKey(SortKey::Deadline),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::SortMenu],
            pattern: KeyPattern::Single(KeyCode::Char('3')),
            description: "Sort by progress",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::SetSortKey(SortKey::Progress),
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::FilterMenu],
            pattern: KeyPattern::Single(KeyCode::Char('c')),
            description: "Clear status filters",
            category: Category::Filtering,
            alternatives: &[],
            show_in_help: false,
        },
        action: Message::ClearStatuses,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::SortMenu],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Close menu",
            category: Category::Navigation,
            alternatives: &[
                KeyPattern::Single(KeyCode::Char('q')),
                KeyPattern::Single(KeyCode::Char('s')),
            ],
            show_in_help: false,
        },
        action: Message::CloseMenu,
    },
    Binding {
        key: KeyBinding {
            modes: &[Mode::FilterMenu],
            pattern: KeyPattern::Single(KeyCode::Esc),
            description: "Close menu",
            category: Category::Navigation,
            alternatives: &[
                KeyPattern::Single(KeyCode::Char('q')),
                KeyPattern::Single(KeyCode::Char('f')),
            ],
            show_in_help: false,
        },
        action: Message::CloseMenu,
    },
];
