//! Test utilities and fixtures for projboard tests

#![allow(dead_code)]

use chrono::NaiveDate;
use projboard::config::Config;
use projboard::data::{ProjectRecord, ProjectStatus, RecordStore};
use projboard::tui::App;

/// Build a record with fixed start date and the given fields
pub fn project(
    id: &str,
    name: &str,
    client: &str,
    status: ProjectStatus,
    end_date: &str,
    completion: u8,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: name.to_string(),
        client_name: client.to_string(),
        status,
        start_date: "2024-01-01".to_string(),
        end_date: end_date.to_string(),
        completion_percentage: completion,
    }
}

/// Six records covering every status, a shared client and a tie in progress
pub fn sample_records() -> Vec<ProjectRecord> {
    vec![
        project("p1", "Website Redesign", "Acme Corp", ProjectStatus::Active, "2024-06-30", 60),
        project("p2", "Mobile App", "Beta Industries", ProjectStatus::OnHold, "2024-04-15", 35),
        project("p3", "Data Migration", "Acme Corp", ProjectStatus::Completed, "2024-02-28", 100),
        project("p4", "analytics Dashboard", "Gamma LLC", ProjectStatus::Active, "2024-03-31", 60),
        project("p5", "Brand Refresh", "Delta Partners", ProjectStatus::Active, "2024-05-20", 15),
        project("p6", "CRM Rollout", "Beta Industries", ProjectStatus::Completed, "2024-01-31", 100),
    ]
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// App over `records` with default config and a pinned reference date
pub fn app_with(records: Vec<ProjectRecord>) -> App {
    let mut app = App::new(Config::default(), RecordStore::new(records));
    app.today = reference_date();
    app
}

pub fn sample_app() -> App {
    app_with(sample_records())
}

pub fn names(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

pub fn ids(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
