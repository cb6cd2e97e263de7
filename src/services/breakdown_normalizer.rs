use crate::config::constants::{
    CODE_QUALITY_MARKER, CODE_QUALITY_MAX_POINTS, DEFAULT_CATEGORY_MAX_POINTS,
    MAJOR_CATEGORY_MARKERS, MAJOR_CATEGORY_MAX_POINTS, MODERATE_RATIO, STRONG_RATIO,
};
use crate::enums::category_strength::CategoryStrength;
use crate::structs::breakdown::Breakdown;
use crate::structs::category_indicator::CategoryIndicator;

pub struct BreakdownNormalizer;

impl BreakdownNormalizer {

    /// Maximum attainable points for a free-text category label.
    /// Labels that match nothing get the default maximum.
    pub fn max_points(category: &str) -> u32 {
        if category.contains(CODE_QUALITY_MARKER) {
            CODE_QUALITY_MAX_POINTS
        } else if MAJOR_CATEGORY_MARKERS.iter().any(|marker| category.contains(marker)) {
            MAJOR_CATEGORY_MAX_POINTS
        } else {
            DEFAULT_CATEGORY_MAX_POINTS
        }
    }

    pub fn strength(ratio: f64) -> CategoryStrength {
        if ratio > STRONG_RATIO {
            CategoryStrength::Strong
        } else if ratio > MODERATE_RATIO {
            CategoryStrength::Moderate
        } else {
            CategoryStrength::Weak
        }
    }

    pub fn normalize(category: &str, points: i64) -> CategoryIndicator {
        let max = Self::max_points(category);
        let ratio = points as f64 / f64::from(max);
        CategoryIndicator {
            category: category.to_string(),
            points,
            max,
            ratio,
            strength: Self::strength(ratio),
        }
    }

    pub fn normalize_all(breakdown: &Breakdown) -> Vec<CategoryIndicator> {
        breakdown
            .iter()
            .map(|entry| Self::normalize(&entry.category, entry.points))
            .collect()
    }
}
