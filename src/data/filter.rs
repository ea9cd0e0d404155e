//! Status and text predicates for the project list.

use super::{ProjectRecord, ProjectStatus};
use std::collections::HashSet;

/// An empty selection means "no status filter", not "match nothing".
pub fn matches_status(record: &ProjectRecord, selected: &HashSet<ProjectStatus>) -> bool {
    selected.is_empty() || selected.contains(&record.status)
}

/// Case-insensitive substring match on name or client.
///
/// A blank (empty or whitespace-only) query matches everything. Otherwise the
/// query is used verbatim, surrounding whitespace included.
pub fn matches_search(record: &ProjectRecord, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.client_name.to_lowercase().contains(&needle)
}

/// Keep records that pass both predicates, preserving input order.
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    query: &str,
    selected: &HashSet<ProjectStatus>,
) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|r| matches_status(r, selected) && matches_search(r, query))
        .collect()
}
