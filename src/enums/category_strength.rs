use serde::{Deserialize, Serialize};

/// Color bucket of a breakdown category, from its earned/max ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStrength {
    Strong,
    Moderate,
    Weak,
}

impl CategoryStrength {
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Strong => "green",
            Self::Moderate => "yellow",
            Self::Weak => "red",
        }
    }
}
