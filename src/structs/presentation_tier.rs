use serde::Serialize;
use crate::enums::tier::Tier;

/// Presentation tokens for a score. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresentationTier {
    pub tier: Tier,
    pub label: &'static str,
    pub badge: &'static str,
    pub color: &'static str,
    pub badge_color: &'static str,
    pub icon: &'static str,
}
