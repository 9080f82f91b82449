//! Skill Matcher — how much of a job's skill list the profile covers.

use crate::matching::tokenizer::Tokenizer;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCoverage {
    /// matched skills / listed skills; 0.0 when the job lists none
    pub fraction: f64,
    /// Matched skill phrases, in the job's listing order.
    pub matched: Vec<String>,
}

/// A skill matches when every one of its tokens is a substring of some profile
/// token or has some profile token as a substring ("node" ~ "node.js" both ways).
///
/// A skill whose tokens are all filtered out (e.g. "C", "R") has nothing to
/// check and therefore matches any profile.
pub fn match_skills(
    tokenizer: &Tokenizer,
    job_skills: &[String],
    profile_tokens: &[String],
) -> SkillCoverage {
    if job_skills.is_empty() {
        return SkillCoverage::default();
    }

    let matched: Vec<String> = job_skills
        .iter()
        .filter(|skill| {
            tokenizer.tokenize(skill).iter().all(|skill_token| {
                profile_tokens
                    .iter()
                    .any(|pt| pt.contains(skill_token.as_str()) || skill_token.contains(pt.as_str()))
            })
        })
        .cloned()
        .collect();

    SkillCoverage {
        fraction: matched.len() as f64 / job_skills.len() as f64,
        matched,
    }
}
