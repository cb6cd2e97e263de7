use serde::Serialize;
use crate::enums::result_source::ResultSource;
use crate::structs::analysis_result::AnalysisResult;

/// A result together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub source: ResultSource,
}

impl AnalysisOutcome {
    pub fn live(result: AnalysisResult) -> Self {
        Self { result, source: ResultSource::Live }
    }

    pub fn demo(result: AnalysisResult) -> Self {
        Self { result, source: ResultSource::Demo }
    }

    pub fn is_demo(&self) -> bool {
        self.source == ResultSource::Demo
    }
}
