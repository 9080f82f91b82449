//! Job Scorer — blends skill coverage and description overlap into one score.
//!
//! finalScore = min(1, skill_weight × skillScore + description_weight × descScore),
//! rounded to 2 decimals. Each job is scored on its own; nothing here looks at
//! the rest of the catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::similarity::jaccard;
use crate::matching::skills::match_skills;
use crate::matching::tokenizer::Tokenizer;
use crate::models::job::Job;

/// Blend weights and output limits for one scoring version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub description_weight: f64,
    pub max_results: usize,
    pub max_keywords: usize,
    /// Shorter shared tokens are scored but not reported as keywords.
    pub min_keyword_len: usize,
}

impl ScoringConfig {
    /// Keyword-overlap scoring, version 1.
    pub fn v1() -> Self {
        Self {
            skill_weight: 0.6,
            description_weight: 0.4,
            max_results: 10,
            max_keywords: 10,
            min_keyword_len: 3,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v1()
    }
}

/// A tokenized profile: the raw sequence (for substring skill checks) and
/// its unique tokens in first-seen order.
#[derive(Debug, Clone)]
pub struct ProfileTokens {
    pub tokens: Vec<String>,
    unique: Vec<String>,
    set: HashSet<String>,
}

impl ProfileTokens {
    pub fn new(tokenizer: &Tokenizer, text: &str) -> Self {
        let tokens = tokenizer.tokenize(text);
        let mut set = HashSet::with_capacity(tokens.len());
        let unique = tokens
            .iter()
            .filter(|t| set.insert((*t).clone()))
            .cloned()
            .collect();
        Self {
            tokens,
            unique,
            set,
        }
    }

    pub fn set(&self) -> &HashSet<String> {
        &self.set
    }

    pub fn unique(&self) -> &[String] {
        &self.unique
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobScore {
    pub skill_score: f64,
    pub description_score: f64,
    /// Blended, clamped to [0, 1] and rounded to 2 decimals.
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JobScorer {
    config: ScoringConfig,
    tokenizer: Tokenizer,
}

impl JobScorer {
    pub fn new(config: ScoringConfig, tokenizer: Tokenizer) -> Self {
        Self { config, tokenizer }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn score(&self, profile: &ProfileTokens, job: &Job) -> JobScore {
        let job_tokens = self.tokenizer.token_set(&combined_job_text(job));

        let coverage = match_skills(&self.tokenizer, &job.skills, &profile.tokens);
        let description_score = jaccard(profile.set(), &job_tokens);

        let blended = self.config.skill_weight * coverage.fraction
            + self.config.description_weight * description_score;
        let score = round_2dp(blended.clamp(0.0, 1.0));

        let mut seen: HashSet<&str> = HashSet::new();
        let matched_keywords = coverage
            .matched
            .iter()
            .chain(profile.unique().iter().filter(|t| {
                t.len() >= self.config.min_keyword_len && job_tokens.contains(t.as_str())
            }))
            .filter(|k| seen.insert(k.as_str()))
            .take(self.config.max_keywords)
            .cloned()
            .collect();

        JobScore {
            skill_score: coverage.fraction,
            description_score,
            score,
            matched_keywords,
        }
    }
}

/// Title, description and skill phrases joined with spaces.
fn combined_job_text(job: &Job) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(job.skills.len() + 2);
    parts.push(&job.title);
    parts.push(&job.description);
    parts.extend(job.skills.iter().map(String::as_str));
    parts.join(" ")
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
