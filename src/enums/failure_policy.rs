use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the orchestrator does when the analysis service fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Surface the failure as the error state.
    #[default]
    Strict,
    /// Substitute the labeled demo result and succeed.
    Lenient,
}

impl FailurePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}
