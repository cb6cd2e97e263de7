use serde::{Deserialize, Serialize};

/// How roadmap steps are carried in the report download link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapEncoding {
    /// One `roadmap` parameter holding the comma-joined steps. This is what
    /// `/download-pdf` splits on, so a step containing a comma is split too.
    #[default]
    Joined,
    /// One `roadmap` parameter per step.
    Repeated,
}
