use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::matching::ranker::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only snapshot; every request ranks against the same postings.
    pub catalog: Arc<JobCatalog>,
    /// Pluggable matcher. Default: KeywordMatcher (v1-keyword).
    pub matcher: Arc<dyn JobMatcher>,
}
