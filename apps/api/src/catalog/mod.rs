//! Job catalog — an immutable, versioned snapshot of the postings.
//!
//! Loaded once at startup. Handlers share it through an `Arc` and only ever
//! read from it; match results are new values, never edits to the postings.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::job::Job;

const SEED_JOBS: &str = include_str!("../../data/jobs.json");

/// Keys a match result adds on top of the job's own fields.
const RESERVED_KEYS: &[&str] = &["score", "matchedKeywords"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid job JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Job {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Duplicate job id {0}")]
    DuplicateId(u32),

    #[error("Job {id} uses reserved field '{key}'")]
    ReservedField { id: u32, key: String },
}

#[derive(Debug, Clone)]
pub struct JobCatalog {
    pub version: u32,
    pub loaded_at: DateTime<Utc>,
    pub jobs: Arc<[Job]>,
}

impl JobCatalog {
    /// Validates and freezes a set of jobs.
    pub fn new(version: u32, jobs: Vec<Job>) -> Result<Self, CatalogError> {
        validate(&jobs)?;
        Ok(Self {
            version,
            loaded_at: Utc::now(),
            jobs: jobs.into(),
        })
    }

    pub fn from_json(version: u32, json: &str) -> Result<Self, CatalogError> {
        let jobs: Vec<Job> = serde_json::from_str(json)?;
        Self::new(version, jobs)
    }

    /// The catalog bundled with the binary.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(1, SEED_JOBS)
    }

    /// Loads from `path` when given, otherwise falls back to the seed catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                let catalog = Self::from_json(1, &json)?;
                info!("Loaded {} jobs from {}", catalog.len(), path.display());
                catalog
            }
            None => {
                let catalog = Self::seed()?;
                info!("Loaded {} seed jobs", catalog.len());
                catalog
            }
        };
        if catalog.is_empty() {
            warn!("Job catalog is empty; every match will return no results");
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn validate(jobs: &[Job]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if job.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(job.id));
        }
        if !seen.insert(job.id) {
            return Err(CatalogError::DuplicateId(job.id));
        }
        if let Some(key) = RESERVED_KEYS.iter().find(|k| job.extra.contains_key(**k)) {
            return Err(CatalogError::ReservedField {
                id: job.id,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
