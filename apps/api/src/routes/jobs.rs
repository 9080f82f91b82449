use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
    pub catalog_version: u32,
    pub loaded_at: DateTime<Utc>,
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let catalog = &state.catalog;
    Json(JobListResponse {
        jobs: catalog.jobs.to_vec(),
        count: catalog.len(),
        catalog_version: catalog.version,
        loaded_at: catalog.loaded_at,
    })
}
