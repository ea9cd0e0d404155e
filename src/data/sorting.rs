//! Sorting logic for the visible project list.
//!
//! This module is the single source of truth for project ordering; the TUI
//! and the `list` command both go through [`sort_projects`].

use super::{ProjectRecord, SortKey};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort a list of project references by the given key.
///
/// All orderings are stable: records that compare equal keep the order they
/// arrived in.
pub fn sort_projects(mut projects: Vec<&ProjectRecord>, sort_key: SortKey) -> Vec<&ProjectRecord> {
    match sort_key {
        SortKey::Name => {
            projects.sort_by(|a, b| compare_names(&a.name, &b.name));
        }
        SortKey::Deadline => {
            // Unparseable end dates go last
            projects.sort_by_key(|p| match p.end() {
                Some(date) => (0u8, Some(date)),
                None => (1u8, None),
            });
        }
        SortKey::Progress => {
            projects.sort_by(|a, b| b.completion_percentage.cmp(&a.completion_percentage));
        }
    }
    projects
}

/// Dictionary-style name ordering.
///
/// Base letters decide first, so "Éclair" sits among the e's and "apollo"
/// next to "Apollo". Accents break ties after that, then case with lowercase
/// first, then the raw string.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameKey::new(a)
        .cmp(&NameKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Collation levels compared in field order.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    base: String,
    accents: String,
    uppercase: Vec<bool>,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let base = name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let accents = name.nfd().flat_map(char::to_lowercase).collect();
        let uppercase = name
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(char::is_uppercase)
            .collect();
        Self {
            base,
            accents,
            uppercase,
        }
    }
}
