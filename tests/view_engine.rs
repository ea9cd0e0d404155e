//! Tests for the derived-view pipeline: search, status filter, sort and
//! aggregate statistics.

mod test_utils;

use pretty_assertions::assert_eq;
use projboard::data::{
    compute_aggregate_stats, compute_visible_projects, days_remaining, is_overdue, AggregateStats,
    ProjectStatus, SortKey,
};
use std::collections::HashSet;
use test_utils::{ids, names, project, sample_records};

fn statuses(list: &[ProjectStatus]) -> HashSet<ProjectStatus> {
    list.iter().copied().collect()
}

// ============================================================================
// Unfiltered ordering
// ============================================================================

#[test]
fn test_no_filters_sorted_by_name() {
    let records = sample_records();
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Name);

    assert_eq!(
        names(&visible),
        vec![
            "analytics Dashboard",
            "Brand Refresh",
            "CRM Rollout",
            "Data Migration",
            "Mobile App",
            "Website Redesign",
        ]
    );
}

#[test]
fn test_input_slice_not_reordered() {
    let records = sample_records();
    let before: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    let _ = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Progress);
    let after: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
}

// ============================================================================
// Status filter
// ============================================================================

#[test]
fn test_status_filter_exact_membership() {
    let records = sample_records();
    let selected = statuses(&[ProjectStatus::Active, ProjectStatus::OnHold]);
    let visible = compute_visible_projects(&records, "", &selected, SortKey::Name);

    assert!(visible.iter().all(|p| selected.contains(&p.status)));
    let expected = records
        .iter()
        .filter(|r| selected.contains(&r.status))
        .count();
    assert_eq!(visible.len(), expected);

    let unique: HashSet<_> = visible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(unique.len(), visible.len(), "no record appears twice");
}

#[test]
fn test_single_status_filter() {
    let records = sample_records();
    let visible = compute_visible_projects(
        &records,
        "",
        &statuses(&[ProjectStatus::Completed]),
        SortKey::Name,
    );
    assert_eq!(ids(&visible), vec!["p6", "p3"]);
}

#[test]
fn test_unknown_status_never_matches_a_filter() {
    let mut records = sample_records();
    records.push(project("p7", "Legacy Port", "Omega", ProjectStatus::Unknown, "2024-07-01", 5));

    let all = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Name);
    assert_eq!(all.len(), 7, "unknown status is shown when nothing is filtered");

    let every_status = statuses(&[
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ]);
    let filtered = compute_visible_projects(&records, "", &every_status, SortKey::Name);
    assert!(filtered.iter().all(|p| p.id != "p7"));
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_is_case_insensitive() {
    let records = sample_records();
    let lower = compute_visible_projects(&records, "acme", &HashSet::new(), SortKey::Name);
    let upper = compute_visible_projects(&records, "ACME", &HashSet::new(), SortKey::Name);

    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(ids(&lower), vec!["p3", "p1"]);
}

#[test]
fn test_search_matches_name_or_client() {
    let records = sample_records();
    let by_name = compute_visible_projects(&records, "dashboard", &HashSet::new(), SortKey::Name);
    assert_eq!(ids(&by_name), vec!["p4"]);

    let by_client = compute_visible_projects(&records, "industries", &HashSet::new(), SortKey::Name);
    assert_eq!(ids(&by_client), vec!["p6", "p2"]);
}

#[test]
fn test_search_query_used_verbatim() {
    let records = sample_records();
    // Inner whitespace is significant
    let visible = compute_visible_projects(&records, "e a", &HashSet::new(), SortKey::Name);
    assert_eq!(ids(&visible), vec!["p2"]);
}

#[test]
fn test_whitespace_query_matches_everything() {
    let records = sample_records();
    let visible = compute_visible_projects(&records, "   ", &HashSet::new(), SortKey::Name);
    assert_eq!(visible.len(), records.len());
}

#[test]
fn test_search_and_status_combine() {
    let records = sample_records();
    let visible = compute_visible_projects(
        &records,
        "acme",
        &statuses(&[ProjectStatus::Active]),
        SortKey::Name,
    );
    assert_eq!(ids(&visible), vec!["p1"]);
}

#[test]
fn test_no_matches_yields_empty() {
    let records = sample_records();
    let visible = compute_visible_projects(&records, "nothing like this", &HashSet::new(), SortKey::Name);
    assert!(visible.is_empty());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_deadline_ascending() {
    let records = sample_records();
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Deadline);
    assert_eq!(ids(&visible), vec!["p6", "p3", "p4", "p2", "p5", "p1"]);
}

#[test]
fn test_deadline_puts_invalid_dates_last() {
    let records = vec![
        project("a", "A", "X", ProjectStatus::Active, "not-a-date", 10),
        project("b", "B", "X", ProjectStatus::Active, "2024-05-01", 10),
        project("c", "C", "X", ProjectStatus::Active, "", 10),
        project("d", "D", "X", ProjectStatus::Active, "2024-02-01", 10),
    ];
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Deadline);
    assert_eq!(ids(&visible), vec!["d", "b", "a", "c"]);
}

#[test]
fn test_progress_descending_and_stable() {
    let records = sample_records();
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Progress);
    // Ties keep input order: p3 before p6, p1 before p4
    assert_eq!(ids(&visible), vec!["p3", "p6", "p1", "p4", "p2", "p5"]);
}

#[test]
fn test_name_order_is_dictionary_style() {
    let records = vec![
        project("1", "Zeta", "X", ProjectStatus::Active, "2024-01-01", 1),
        project("2", "Éclair", "X", ProjectStatus::Active, "2024-01-01", 1),
        project("3", "apollo", "X", ProjectStatus::Active, "2024-01-01", 1),
        project("4", "Apollo", "X", ProjectStatus::Active, "2024-01-01", 1),
    ];
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Name);
    assert_eq!(names(&visible), vec!["apollo", "Apollo", "Éclair", "Zeta"]);
}

#[test]
fn test_name_ties_keep_input_order() {
    let records = vec![
        project("first", "Same", "X", ProjectStatus::Active, "2024-01-01", 1),
        project("second", "Same", "Y", ProjectStatus::Active, "2024-01-01", 2),
    ];
    let visible = compute_visible_projects(&records, "", &HashSet::new(), SortKey::Name);
    assert_eq!(ids(&visible), vec!["first", "second"]);
}

// ============================================================================
// Aggregate statistics
// ============================================================================

#[test]
fn test_stats_empty_store() {
    assert_eq!(compute_aggregate_stats(&[]), AggregateStats::default());
}

#[test]
fn test_stats_two_record_example() {
    let records = vec![
        project("1", "A", "X", ProjectStatus::Active, "2024-02-01", 40),
        project("2", "B", "Y", ProjectStatus::Completed, "2024-02-01", 100),
    ];
    assert_eq!(
        compute_aggregate_stats(&records),
        AggregateStats {
            active_count: 1,
            completed_count: 1,
            on_hold_count: 0,
            average_completion: 70,
        }
    );
}

#[test]
fn test_stats_sample_set() {
    let stats = compute_aggregate_stats(&sample_records());
    assert_eq!(stats.active_count, 3);
    assert_eq!(stats.completed_count, 2);
    assert_eq!(stats.on_hold_count, 1);
    // 370 / 6 = 61.67
    assert_eq!(stats.average_completion, 62);
}

// ============================================================================
// Day arithmetic
// ============================================================================

#[test]
fn test_days_remaining_examples() {
    let jan5 = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let jan15 = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    assert_eq!(days_remaining("2024-01-10", jan5), 5);
    assert_eq!(days_remaining("2024-01-10", jan15), -5);

    let active = project("1", "A", "X", ProjectStatus::Active, "2024-01-10", 50);
    let done = project("2", "B", "X", ProjectStatus::Completed, "2024-01-10", 100);
    assert!(is_overdue(&active, jan15));
    assert!(!is_overdue(&done, jan15));
    assert!(!is_overdue(&active, jan5));
}
