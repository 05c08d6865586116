use std::cmp::Ordering;

use crate::models::{ComponentScores, Property, ScoringWeights};

/// A candidate carrying its scores, prior to truncation and reasoning
#[derive(Debug, Clone)]
pub struct ScoredProperty {
    pub property: Property,
    pub component_scores: ComponentScores,
    pub total_score: f64,
}

/// Combine component scores into the single ranking key
///
/// Weights are fractions summing to 1.0 over 0-100 component scores, so
/// the weighted sum already lands in [0, 100]; the clamp guards against
/// caller-supplied weight sets that overshoot.
pub fn weighted_total(scores: &ComponentScores, weights: &ScoringWeights) -> f64 {
    let total: f64 = scores
        .iter()
        .map(|(component, score)| component.weight(weights) * score)
        .sum();

    total.clamp(0.0, 100.0)
}

/// Order candidates by descending total score, ties by ascending id
///
/// The id tie break makes ranking a total order, so equal-scoring inputs
/// always come back in the same sequence.
pub fn rank(candidates: &mut [ScoredProperty]) {
    candidates.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.property.id.cmp(&b.property.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(value: f64) -> ComponentScores {
        ComponentScores {
            price_match: value,
            bedroom: value,
            school_rating: value,
            commute: value,
            property_age: value,
            amenities: value,
        }
    }

    fn scored(id: u64, total: f64) -> ScoredProperty {
        ScoredProperty {
            property: Property {
                id,
                title: format!("Property {}", id),
                price: 400_000.0,
                location: "Denver, CO".to_string(),
                bedrooms: 3,
                bathrooms: 2,
                size_sqft: 1600,
                year_built: Some(2010),
                amenities: vec![],
                school_rating: None,
                commute_time: None,
            },
            component_scores: scores(total),
            total_score: total,
        }
    }

    #[test]
    fn test_uniform_scores_pass_through() {
        let weights = ScoringWeights::default();
        let total = weighted_total(&scores(80.0), &weights);
        assert!((total - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_total_respects_weights() {
        let weights = ScoringWeights::default();
        let mixed = ComponentScores {
            price_match: 100.0,
            bedroom: 0.0,
            school_rating: 0.0,
            commute: 0.0,
            property_age: 0.0,
            amenities: 0.0,
        };

        // Only the 0.30-weighted component contributes
        let total = weighted_total(&mixed, &weights);
        assert!((total - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_overshooting_weights_are_clamped() {
        let weights = ScoringWeights {
            price_match: 1.0,
            bedroom: 1.0,
            school_rating: 1.0,
            commute: 1.0,
            property_age: 1.0,
            amenities: 1.0,
        };

        assert_eq!(weighted_total(&scores(100.0), &weights), 100.0);
    }

    #[test]
    fn test_rank_descending_by_total() {
        let mut candidates = vec![scored(1, 40.0), scored(2, 90.0), scored(3, 65.0)];
        rank(&mut candidates);

        let ids: Vec<u64> = candidates.iter().map(|c| c.property.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_ties_broken_by_ascending_id() {
        let mut candidates = vec![scored(9, 70.0), scored(2, 70.0), scored(5, 70.0)];
        rank(&mut candidates);

        let ids: Vec<u64> = candidates.iter().map(|c| c.property.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
