//! Glyphs used throughout the UI.

// Project status
pub const STATUS_ACTIVE: &str = "◑"; // Half filled - in progress
pub const STATUS_ON_HOLD: &str = "◌"; // Dotted circle - paused
pub const STATUS_COMPLETED: &str = "●"; // Full circle
pub const STATUS_UNKNOWN: &str = "?";

// Selection markers
pub const CURSOR: &str = "▶";
pub const RADIO_ON: &str = "●";
pub const RADIO_OFF: &str = "○";
pub const CHECK_ON: &str = "[x]";
pub const CHECK_OFF: &str = "[ ]";

// Section icons
pub const ICON_SEARCH: &str = "󰍉"; // nf-md-magnify
pub const ICON_FILTER: &str = "󰈲"; // nf-md-filter
pub const ICON_SORT: &str = "󰒺"; // nf-md-sort
pub const ICON_HELP: &str = "󰋗"; // nf-md-help_circle
pub const ICON_PROJECT: &str = "󰈙"; // nf-md-folder
pub const ICON_DASHBOARD: &str = "󰕮"; // nf-md-view_dashboard
