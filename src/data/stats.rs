use super::{ProjectRecord, ProjectStatus};
use serde::Serialize;

/// Headline numbers shown above the project list.
///
/// Always computed over the whole record store; search and filters do not
/// affect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub active_count: usize,
    pub completed_count: usize,
    pub on_hold_count: usize,
    /// Mean completion percentage, rounded half up. 0 for an empty store.
    pub average_completion: u8,
}

pub fn compute_aggregate_stats(records: &[ProjectRecord]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    let mut total: u64 = 0;

    for record in records {
        match record.status {
            ProjectStatus::Active => stats.active_count += 1,
            ProjectStatus::Completed => stats.completed_count += 1,
            ProjectStatus::OnHold => stats.on_hold_count += 1,
            ProjectStatus::Unknown => {}
        }
        total += u64::from(record.completion_percentage);
    }

    if !records.is_empty() {
        let n = records.len() as u64;
        // round(total / n) with halves going up, in integer arithmetic
        let rounded = (2 * total + n) / (2 * n);
        stats.average_completion = rounded.min(100) as u8;
    }

    stats
}
