//! Calendar helpers for project timelines.
//!
//! Dates arrive as `YYYY-MM-DD` strings. Nothing here fails: unparseable input
//! falls back to the raw string (formatting) or zero (day arithmetic).

use super::{ProjectRecord, ProjectStatus};
use chrono::{NaiveDate, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE).ok()
}

/// Format an ISO date for display, e.g. `2024-01-10` -> `Jan 10, 2024`.
pub fn format_date(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// Whole days from `reference` until `end_date`. Negative once the date has
/// passed, 0 when `end_date` cannot be parsed.
pub fn days_remaining(end_date: &str, reference: NaiveDate) -> i64 {
    match parse_date(end_date) {
        Some(end) => (end - reference).num_days(),
        None => 0,
    }
}

/// [`days_remaining`] against the current UTC date.
pub fn days_remaining_today(end_date: &str) -> i64 {
    days_remaining(end_date, today())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Past its end date and not yet completed.
pub fn is_overdue(record: &ProjectRecord, reference: NaiveDate) -> bool {
    days_remaining(&record.end_date, reference) < 0 && record.status != ProjectStatus::Completed
}

/// Short timeline label used in cards and rows: `5d left` / `3d overdue`.
pub fn timeline_label(record: &ProjectRecord, reference: NaiveDate) -> String {
    let days = days_remaining(&record.end_date, reference);
    if is_overdue(record, reference) {
        format!("{}d overdue", days.abs())
    } else {
        format!("{}d left", days)
    }
}
