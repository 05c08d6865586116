use crate::core::normalize::NormalizedFeatures;
use crate::models::{ComponentScores, ScoringThresholds};

/// Calculate the price match score (0-100)
///
/// 100 when the price is within budget, then a linear decay that reaches 0
/// once the price hits `price_ceiling_ratio` times the budget. A small
/// overage is tolerable; a gross one scores 0 but is never hard-filtered.
#[inline]
pub fn price_match_score(price_ratio: f64, thresholds: &ScoringThresholds) -> f64 {
    if price_ratio <= 1.0 {
        return 100.0;
    }

    let span = thresholds.price_ceiling_ratio - 1.0;
    if span <= 0.0 {
        return 0.0;
    }

    clamp_score(100.0 * (1.0 - (price_ratio - 1.0) / span))
}

/// Calculate the bedroom score (0-100)
///
/// 100 when the minimum is met, dropping by a fixed step per missing
/// bedroom: one short scores 50, two short scores 0 with default thresholds.
#[inline]
pub fn bedroom_score(bedroom_shortfall: u32, thresholds: &ScoringThresholds) -> f64 {
    clamp_score(100.0 - bedroom_shortfall as f64 * thresholds.bedroom_shortfall_step)
}

/// Calculate the school rating score (0-100)
///
/// Neutral 100 when no deficit is defined (rating or minimum absent);
/// otherwise 100 at or above the minimum, decaying linearly to 0 at
/// `school_floor_span` rating points below it.
#[inline]
pub fn school_rating_score(school_deficit: Option<f64>, thresholds: &ScoringThresholds) -> f64 {
    let deficit = match school_deficit {
        Some(d) => d,
        None => return 100.0,
    };

    if deficit <= 0.0 {
        return 100.0;
    }

    if thresholds.school_floor_span <= 0.0 {
        return 0.0;
    }

    clamp_score(100.0 * (1.0 - deficit / thresholds.school_floor_span))
}

/// Calculate the commute score (0-100)
///
/// Neutral 100 when either side is unknown; otherwise 100 within the
/// ceiling, decaying linearly to 0 at `commute_grace_minutes` past it.
#[inline]
pub fn commute_score(commute_overage: Option<f64>, thresholds: &ScoringThresholds) -> f64 {
    let overage = match commute_overage {
        Some(o) => o,
        None => return 100.0,
    };

    if overage <= 0.0 {
        return 100.0;
    }

    if thresholds.commute_grace_minutes <= 0.0 {
        return 0.0;
    }

    clamp_score(100.0 * (1.0 - overage / thresholds.commute_grace_minutes))
}

/// Calculate the property age score (0-100)
///
/// Preference-independent recency score: 100 for current-year construction,
/// decaying linearly to `age_floor_score` at `age_horizon_years`, never
/// below the floor. Unknown build year scores `age_unknown_score`.
#[inline]
pub fn property_age_score(
    year_built: Option<i32>,
    current_year: i32,
    thresholds: &ScoringThresholds,
) -> f64 {
    let year = match year_built {
        Some(y) => y,
        None => return clamp_score(thresholds.age_unknown_score),
    };

    let age = (current_year - year).max(0) as f64;
    if thresholds.age_horizon_years <= 0.0 {
        return clamp_score(thresholds.age_floor_score);
    }

    let decayed = 100.0 - age / thresholds.age_horizon_years * (100.0 - thresholds.age_floor_score);
    clamp_score(decayed.max(thresholds.age_floor_score))
}

/// Calculate the amenities score (0-100)
///
/// Proportional to the overlap with the preferred set; neutral 100 when
/// the buyer expressed no amenity preference.
#[inline]
pub fn amenities_score(amenity_overlap: Option<f64>) -> f64 {
    match amenity_overlap {
        Some(overlap) => clamp_score(overlap * 100.0),
        None => 100.0,
    }
}

/// Assemble all six component scores for one property
pub fn score_components(
    features: &NormalizedFeatures,
    year_built: Option<i32>,
    current_year: i32,
    thresholds: &ScoringThresholds,
) -> ComponentScores {
    ComponentScores {
        price_match: price_match_score(features.price_ratio, thresholds),
        bedroom: bedroom_score(features.bedroom_shortfall, thresholds),
        school_rating: school_rating_score(features.school_deficit, thresholds),
        commute: commute_score(features.commute_overage, thresholds),
        property_age: property_age_score(year_built, current_year, thresholds),
        amenities: amenities_score(features.amenity_overlap),
    }
}

#[inline]
fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
