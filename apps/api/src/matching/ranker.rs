//! Ranker — scores every job against one profile and keeps the best few.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`, so a TF-IDF or embedding backend
//! can replace `KeywordMatcher` without touching the handlers.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::errors::AppError;
use crate::matching::scorer::{JobScorer, ProfileTokens, ScoringConfig};
use crate::matching::tokenizer::Tokenizer;
use crate::models::job::{Job, MatchResult};

pub const KEYWORD_V1: &str = "v1-keyword";

#[async_trait]
pub trait JobMatcher: Send + Sync {
    /// Label reported next to results, e.g. "v1-keyword".
    fn algorithm(&self) -> &'static str;

    fn config(&self) -> &ScoringConfig;

    async fn match_jobs(&self, profile: &str, jobs: &[Job]) -> Result<Vec<MatchResult>, AppError>;
}

/// Keyword-overlap matcher. Pure, deterministic, no I/O.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    scorer: JobScorer,
}

impl KeywordMatcher {
    pub fn new(config: ScoringConfig, tokenizer: Tokenizer) -> Self {
        Self {
            scorer: JobScorer::new(config, tokenizer),
        }
    }

    /// Scores each job independently, then sorts by score descending.
    ///
    /// The sort is stable, so jobs with equal (rounded) scores keep catalog order.
    pub fn rank(&self, profile: &str, jobs: &[Job]) -> Vec<MatchResult> {
        let profile_tokens = ProfileTokens::new(self.scorer.tokenizer(), profile);

        let mut scored: Vec<MatchResult> = jobs
            .iter()
            .map(|job| {
                let job_score = self.scorer.score(&profile_tokens, job);
                trace!(
                    job_id = job.id,
                    skill_score = job_score.skill_score,
                    description_score = job_score.description_score,
                    score = job_score.score,
                    "Scored job"
                );
                MatchResult {
                    job: job.clone(),
                    score: job_score.score,
                    matched_keywords: job_score.matched_keywords,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.scorer.config().max_results);

        debug!(
            profile_tokens = profile_tokens.tokens.len(),
            jobs = jobs.len(),
            results = scored.len(),
            "Ranked jobs"
        );

        scored
    }
}

#[async_trait]
impl JobMatcher for KeywordMatcher {
    fn algorithm(&self) -> &'static str {
        KEYWORD_V1
    }

    fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    async fn match_jobs(&self, profile: &str, jobs: &[Job]) -> Result<Vec<MatchResult>, AppError> {
        Ok(self.rank(profile, jobs))
    }
}
