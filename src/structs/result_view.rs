use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::result_source::ResultSource;
use crate::structs::category_indicator::CategoryIndicator;
use crate::structs::presentation_tier::PresentationTier;

/// Everything the result screen shows for a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub title: String,
    pub repo_name: String,
    pub owner: String,
    pub score: i64,
    pub tier: PresentationTier,
    pub verdict: Option<String>,
    pub summary: String,
    pub breakdown: Option<Vec<CategoryIndicator>>,
    pub roadmap: RoadmapView,
    pub source: ResultSource,
    pub report_url: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoadmapView {
    Steps { steps: Vec<String> },
    NothingToImprove { message: String },
}

impl RoadmapView {
    pub fn steps(&self) -> &[String] {
        match self {
            Self::Steps { steps } => steps,
            Self::NothingToImprove { .. } => &[],
        }
    }
}
