use serde::Serialize;
use crate::enums::category_strength::CategoryStrength;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryIndicator {
    pub category: String,
    pub points: i64,
    pub max: u32,
    pub ratio: f64,
    pub strength: CategoryStrength,
}

impl CategoryIndicator {
    /// Ratio clamped to 0..=1 for drawing a bar.
    pub fn fill(&self) -> f64 {
        self.ratio.clamp(0.0, 1.0)
    }
}
