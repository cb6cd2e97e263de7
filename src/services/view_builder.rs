use chrono::Utc;
use crate::config::constants::NO_IMPROVEMENTS_MESSAGE;
use crate::enums::roadmap_encoding::RoadmapEncoding;
use crate::services::breakdown_normalizer::BreakdownNormalizer;
use crate::services::report_link_builder::ReportLinkBuilder;
use crate::services::score_classifier::ScoreClassifier;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::result_view::{ResultView, RoadmapView};

pub struct ViewBuilder;

impl ViewBuilder {

    /// Projects a finished outcome into what the result screen shows.
    /// Tier and indicators are recomputed from the result on every call.
    pub fn build(outcome: &AnalysisOutcome, report_base: &str, encoding: RoadmapEncoding) -> ResultView {
        let result = &outcome.result;

        let roadmap = if result.roadmap.is_empty() {
            RoadmapView::NothingToImprove { message: NO_IMPROVEMENTS_MESSAGE.to_string() }
        } else {
            RoadmapView::Steps { steps: result.roadmap.clone() }
        };

        ResultView {
            title: format!("{} / {}", result.owner, result.repo_name),
            repo_name: result.repo_name.clone(),
            owner: result.owner.clone(),
            score: result.score,
            tier: ScoreClassifier::classify(result.score),
            verdict: result.display_verdict().map(str::to_string),
            summary: result.summary.clone(),
            breakdown: result.breakdown.as_ref().map(BreakdownNormalizer::normalize_all),
            roadmap,
            source: outcome.source,
            report_url: ReportLinkBuilder::build(result, report_base, encoding),
            generated_at: Utc::now(),
        }
    }
}
