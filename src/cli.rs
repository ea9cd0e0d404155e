//! Non-interactive output for the `list` and `stats` subcommands.

use crate::data::dates::timeline_label;
use crate::data::{
    compute_aggregate_stats, compute_visible_projects, days_remaining, format_date, is_overdue,
    AggregateStats, ProjectRecord, ProjectStatus, RecordStore, SortKey,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectJson<'a> {
    #[serde(flatten)]
    pub project: &'a ProjectRecord,
    pub days_remaining: i64,
    pub overdue: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJson<'a> {
    pub total: usize,
    pub shown: usize,
    pub projects: Vec<ProjectJson<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsJson {
    pub total: usize,
    #[serde(flatten)]
    pub stats: AggregateStats,
}

/// Filters for `projboard list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: String,
    pub statuses: HashSet<ProjectStatus>,
    pub sort: SortKey,
}

/// Parse `--status` values, rejecting names the dashboard does not know.
pub fn parse_statuses(names: &[String]) -> Result<HashSet<ProjectStatus>> {
    names
        .iter()
        .map(|name| {
            ProjectStatus::from_name(name).with_context(|| {
                format!(
                    "Unknown status '{}' (expected one of: active, on-hold, completed)",
                    name
                )
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn list_json(
    store: &RecordStore,
    opts: &ListOptions,
    today: NaiveDate,
) -> Result<String> {
    let visible = compute_visible_projects(store.records(), &opts.search, &opts.statuses, opts.sort);
    let out = ListJson {
        total: store.len(),
        shown: visible.len(),
        projects: visible
            .into_iter()
            .map(|project| ProjectJson {
                project,
                days_remaining: days_remaining(&project.end_date, today),
                overdue: is_overdue(project, today),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn list_text(store: &RecordStore, opts: &ListOptions, today: NaiveDate) -> String {
    let visible = compute_visible_projects(store.records(), &opts.search, &opts.statuses, opts.sort);

    let mut out = String::new();
    if store.is_empty() {
        out.push_str("No projects available\n");
        return out;
    }
    if visible.is_empty() {
        out.push_str("No projects match your filters\n");
    }

    let name_w = visible
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("PROJECT".len());
    let client_w = visible
        .iter()
        .map(|p| p.client_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("CLIENT".len());

    if !visible.is_empty() {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<client_w$}  {:<9}  {:<12}  {:>4}  TIMELINE",
            "PROJECT", "CLIENT", "STATUS", "DUE", "DONE",
        );
    }
    for p in &visible {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<client_w$}  {:<9}  {:<12}  {:>3}%  {}",
            p.name,
            p.client_name,
            p.status.display_name(),
            format_date(&p.end_date),
            p.completion_percentage,
            timeline_label(p, today),
        );
    }
    let _ = writeln!(out, "\n{} of {} projects", visible.len(), store.len());
    out
}

pub fn stats_json(store: &RecordStore) -> Result<String> {
    let out = StatsJson {
        total: store.len(),
        stats: compute_aggregate_stats(store.records()),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn stats_text(store: &RecordStore) -> String {
    let stats = compute_aggregate_stats(store.records());
    let mut out = String::new();
    let _ = writeln!(out, "Total projects:   {}", store.len());
    let _ = writeln!(out, "Active Projects:  {}", stats.active_count);
    let _ = writeln!(out, "Completed:        {}", stats.completed_count);
    let _ = writeln!(out, "On Hold:          {}", stats.on_hold_count);
    let _ = writeln!(out, "Avg. Progress:    {}%", stats.average_completion);
    out
}
