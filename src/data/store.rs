//! The immutable record store and its loader.
//!
//! Records come from a JSON array (a file, or the sample data compiled into
//! the binary). Loading is the only place that can fail; once built the store
//! is read-only for the rest of the session.

use super::{ProjectRecord, ProjectStatus};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Sample dataset used when no data file is configured
pub const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Wire shape of a record. Percentages are read wide so out-of-range values
/// can be clamped instead of failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    id: String,
    name: String,
    client_name: String,
    status: ProjectStatus,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    completion_percentage: i64,
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ProjectRecord>,
    /// id -> position in `records`
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from already-validated records. Later duplicates of an
    /// id are unreachable through [`RecordStore::get`].
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            index.entry(r.id.clone()).or_insert(i);
        }
        Self { records, index }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> =
            serde_json::from_str(json).context("Failed to parse project data")?;

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(raw.len());
        for r in raw {
            if !seen.insert(r.id.clone()) {
                anyhow::bail!("Duplicate project id '{}' in project data", r.id);
            }
            if r.status == ProjectStatus::Unknown {
                tracing::warn!("Project {} has an unrecognised status", r.id);
            }
            let pct = r.completion_percentage.clamp(0, 100);
            if pct != r.completion_percentage {
                tracing::warn!(
                    "Project {} completion {} out of range, clamped to {}",
                    r.id,
                    r.completion_percentage,
                    pct
                );
            }
            records.push(ProjectRecord {
                id: r.id,
                name: r.name,
                client_name: r.client_name,
                status: r.status,
                start_date: r.start_date,
                end_date: r.end_date,
                completion_percentage: pct as u8,
            });
        }

        Ok(Self::new(records))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project data from {}", path.display()))?;
        let store = Self::from_json(&content)
            .with_context(|| format!("Invalid project data in {}", path.display()))?;
        tracing::info!("Loaded {} projects from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn bundled() -> Result<Self> {
        let store = Self::from_json(BUNDLED_PROJECTS).context("Bundled sample data is invalid")?;
        tracing::info!("Loaded {} bundled sample projects", store.len());
        Ok(store)
    }

    /// Load from `path` when given, otherwise fall back to the bundled data.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::bundled(),
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}
