pub mod dates;
pub mod filter;
pub mod sorting;
pub mod state;
pub mod stats;
pub mod store;

pub use dates::{days_remaining, days_remaining_today, format_date, is_overdue, parse_date};
pub use filter::{filter_projects, matches_search, matches_status};
pub use sorting::sort_projects;
pub use state::ViewState;
pub use stats::{compute_aggregate_stats, AggregateStats};
pub use store::RecordStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single tracked project as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub client_name: String,
    pub status: ProjectStatus,
    /// `YYYY-MM-DD`, kept verbatim so malformed values survive loading
    pub start_date: String,
    pub end_date: String,
    pub completion_percentage: u8,
}

impl ProjectRecord {
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    /// Any status string the dashboard does not know about
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Active => "Work in progress",
            Self::OnHold => "Paused, waiting on the client",
            Self::Completed => "Delivered",
            Self::Unknown => "Unrecognised status in data",
        }
    }

    /// Parse a user-supplied status name (CLI flags). Accepts the display
    /// names plus dashed/underscored/squashed spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "active" => Some(Self::Active),
            "onhold" | "hold" => Some(Self::OnHold),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Statuses offered by the filter UI, in display order
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Active, Self::OnHold, Self::Completed].into_iter()
    }
}

/// Ordering applied to the visible projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Deadline,
    Progress,
}

impl SortKey {
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Deadline,
            Self::Deadline => Self::Progress,
            Self::Progress => Self::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Deadline => "Deadline",
            Self::Progress => "Progress",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Name => "Name (A to Z)",
            Self::Deadline => "Deadline (soonest first)",
            Self::Progress => "Progress (highest first)",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Name, Self::Deadline, Self::Progress].into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

/// Derive the ordered list of records to display.
///
/// Both predicates are AND-combined, then the survivors are stably sorted by
/// `sort_key`. The input slice is never reordered.
pub fn compute_visible_projects<'a>(
    records: &'a [ProjectRecord],
    search_query: &str,
    selected_statuses: &HashSet<ProjectStatus>,
    sort_key: SortKey,
) -> Vec<&'a ProjectRecord> {
    let filtered = filter_projects(records, search_query, selected_statuses);
    sort_projects(filtered, sort_key)
}
