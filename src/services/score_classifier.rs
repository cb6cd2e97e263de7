use crate::config::constants::{ADVANCED_MIN_SCORE, INTERMEDIATE_MIN_SCORE};
use crate::enums::tier::Tier;
use crate::structs::presentation_tier::PresentationTier;

pub struct ScoreClassifier;

impl ScoreClassifier {

    /// Any integer is accepted; out-of-range scores fall into the outer tiers.
    pub fn tier_for(score: i64) -> Tier {
        if score >= ADVANCED_MIN_SCORE {
            Tier::Advanced
        } else if score >= INTERMEDIATE_MIN_SCORE {
            Tier::Intermediate
        } else {
            Tier::Beginner
        }
    }

    pub fn classify(score: i64) -> PresentationTier {
        Self::presentation(Self::tier_for(score))
    }

    pub fn presentation(tier: Tier) -> PresentationTier {
        match tier {
            Tier::Advanced => PresentationTier {
                tier,
                label: tier.label(),
                badge: "Gold Developer",
                color: "purple",
                badge_color: "gold",
                icon: "trophy",
            },
            Tier::Intermediate => PresentationTier {
                tier,
                label: tier.label(),
                badge: "Silver Developer",
                color: "blue",
                badge_color: "silver",
                icon: "medal",
            },
            Tier::Beginner => PresentationTier {
                tier,
                label: tier.label(),
                badge: "Bronze Developer",
                color: "yellow",
                badge_color: "bronze",
                icon: "award",
            },
        }
    }
}
