use serde::{Deserialize, Serialize};
use crate::config::constants::{MAX_SCORE, MIN_SCORE};
use crate::structs::breakdown::Breakdown;

/// Evaluation returned by the analysis service (or the demo fallback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub repo_name: String,
    pub owner: String,
    pub score: i64,
    pub summary: String,
    pub roadmap: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,

    // The service reports its verdict label as `level`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl AnalysisResult {
    pub fn display_verdict(&self) -> Option<&str> {
        self.verdict.as_deref().or(self.level.as_deref())
    }

    /// Checks what the schema alone cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(format!("score {} is outside {}..={}", self.score, MIN_SCORE, MAX_SCORE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_payload_and_ignores_extra_fields() {
        let json = r#"{
            "repo_name": "widget",
            "owner": "acme",
            "score": 85,
            "level": "Strong Hire",
            "summary": "Great repo",
            "roadmap": ["Add tests", "Improve docs"],
            "details": {"code": {}, "commits": {}}
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.repo_name, "widget");
        assert_eq!(result.roadmap, vec!["Add tests", "Improve docs"]);
        assert!(result.breakdown.is_none());
        assert_eq!(result.display_verdict(), Some("Strong Hire"));
        assert!(result.validate().is_ok());
    }

    #[test]
    fn verdict_wins_over_level() {
        let json = r#"{"repo_name":"r","owner":"o","score":50,"summary":"s","roadmap":[],"verdict":"Weak","level":"Maybe / Screen"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.display_verdict(), Some("Weak"));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{"repo_name":"r","owner":"o","summary":"s","roadmap":[]}"#;
        let error = serde_json::from_str::<AnalysisResult>(json).unwrap_err();
        assert!(error.to_string().contains("missing field `score`"));
    }

    #[test]
    fn out_of_range_score_fails_validation() {
        let json = r#"{"repo_name":"r","owner":"o","score":140,"summary":"s","roadmap":[]}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.validate(), Err("score 140 is outside 0..=100".to_string()));
    }
}
