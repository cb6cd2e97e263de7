use crate::structs::analysis_outcome::AnalysisOutcome;

/// Request lifecycle of one orchestration session.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    Idle,
    /// Terminal: no repository identifier was provided, nothing is requested.
    MissingInput,
    Loading,
    Success(Box<AnalysisOutcome>),
    Error(String),
}

impl LifecycleState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::MissingInput => "missing-input",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        match self {
            Self::Success(outcome) => Some(outcome),
            _ => None,
        }
    }
}
