use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job posting as held by the catalog. Read-only during matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Compensation label, e.g. "$120k - $145k".
    #[serde(default)]
    pub salary: String,
    /// Employment-type label, e.g. "Full-time".
    #[serde(rename = "type", default)]
    pub employment_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Display-only fields the engine does not read. Passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A job augmented with its relevance score and the keywords that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: Job,
    /// 0.0 – 1.0, rounded to 2 decimals
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_deserializes_with_missing_optional_fields() {
        let job: Job = serde_json::from_value(json!({"id": 7, "title": "Rust Engineer"})).unwrap();
        assert_eq!(job.id, 7);
        assert!(job.description.is_empty());
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_match_result_serializes_camel_case_and_passes_extra_fields() {
        let job: Job = serde_json::from_value(json!({
            "id": 1,
            "title": "Frontend Engineer",
            "company": "Brightwave",
            "type": "Full-time",
            "skills": ["React"],
            "remotePolicy": "hybrid"
        }))
        .unwrap();
        let result = MatchResult {
            job,
            score: 0.75,
            matched_keywords: vec!["React".to_string()],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["title"], "Frontend Engineer");
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["remotePolicy"], "hybrid");
        assert_eq!(value["score"], 0.75);
        assert_eq!(value["matchedKeywords"], json!(["React"]));
    }
}
