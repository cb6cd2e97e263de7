use serde::Serialize;

/// Base URLs of the analysis call and the report download.
/// Either may be relative (`/api/analyze`) when served behind a proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub analysis: String,
    pub report: String,
}
