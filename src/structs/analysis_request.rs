use serde::{Deserialize, Serialize};

/// Body of the analysis call: `{"url": "<repository identifier>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}
