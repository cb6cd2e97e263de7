use serde::{Deserialize, Serialize};
use crate::enums::failure_policy::FailurePolicy;
use crate::enums::roadmap_encoding::RoadmapEncoding;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Explicit analysis endpoint. Beats every other rule.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Explicit report base. Derived from the analysis endpoint when absent.
    #[serde(default)]
    pub report_url: Option<String>,

    /// Origin the client is deployed under; absent means local development.
    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub roadmap_encoding: RoadmapEncoding,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            report_url: None,
            origin: None,
            failure_policy: FailurePolicy::default(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            roadmap_encoding: RoadmapEncoding::default(),
        }
    }
}
