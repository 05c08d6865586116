use std::collections::HashSet;

use crate::core::RecommendError;
use crate::models::{Property, UserPreferences};

/// Per-criterion comparison values derived from one property and one
/// preference set
///
/// `None` in an optional field means the criterion has no constraint
/// behind it (either side absent) and must score neutral downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    /// property.price / preferences.budget; <= 1.0 is within budget
    pub price_ratio: f64,
    /// Bedrooms missing relative to the minimum; 0 is satisfying
    pub bedroom_shortfall: u32,
    /// Minutes past the commute ceiling, when both sides are known
    pub commute_overage: Option<f64>,
    /// Rating points below the required minimum, when both sides are known
    pub school_deficit: Option<f64>,
    /// Fraction of preferred amenities the property covers
    pub amenity_overlap: Option<f64>,
}

/// Reject malformed preferences before any scoring begins
pub fn validate_preferences(preferences: &UserPreferences) -> Result<(), RecommendError> {
    if preferences.budget <= 0.0 || !preferences.budget.is_finite() {
        return Err(RecommendError::Validation(format!(
            "budget must be positive, got {}",
            preferences.budget
        )));
    }

    if preferences.min_bedrooms < 1 {
        return Err(RecommendError::Validation(format!(
            "min_bedrooms must be at least 1, got {}",
            preferences.min_bedrooms
        )));
    }

    if let Some(rating) = preferences.min_school_rating {
        if !(0.0..=10.0).contains(&rating) {
            return Err(RecommendError::Validation(format!(
                "min_school_rating must be within [0, 10], got {}",
                rating
            )));
        }
    }

    Ok(())
}

/// Map heterogeneous raw fields into comparable ratios and deltas
///
/// Pure function of its two inputs; no side effects.
pub fn normalize(
    property: &Property,
    preferences: &UserPreferences,
) -> Result<NormalizedFeatures, RecommendError> {
    validate_preferences(preferences)?;

    let price_ratio = property.price / preferences.budget;

    let bedroom_shortfall = preferences.min_bedrooms.saturating_sub(property.bedrooms);

    let commute_overage = match (property.commute_time, preferences.max_commute_time) {
        (Some(commute), Some(ceiling)) => Some(commute - ceiling),
        _ => None,
    };

    let school_deficit = match (property.school_rating, preferences.min_school_rating) {
        (Some(rating), Some(minimum)) => Some(minimum - rating),
        _ => None,
    };

    let amenity_overlap = amenity_overlap(&property.amenities, &preferences.preferred_amenities);

    Ok(NormalizedFeatures {
        price_ratio,
        bedroom_shortfall,
        commute_overage,
        school_deficit,
        amenity_overlap,
    })
}

/// Fraction of the preferred amenity set the property covers
///
/// Set semantics: duplicates on either side count once. None when the
/// buyer expressed no amenity preference at all.
fn amenity_overlap(available: &[String], preferred: &[String]) -> Option<f64> {
    let preferred: HashSet<&str> = preferred.iter().map(String::as_str).collect();
    if preferred.is_empty() {
        return None;
    }

    let available: HashSet<&str> = available.iter().map(String::as_str).collect();
    let matched = preferred.intersection(&available).count();

    Some(matched as f64 / preferred.len() as f64)
}
