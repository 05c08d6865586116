use chrono::Datelike;
use rayon::prelude::*;

use crate::core::normalize::{normalize, validate_preferences};
use crate::core::ranking::{rank, weighted_total, ScoredProperty};
use crate::core::reasoning::generate_reasoning;
use crate::core::scoring::score_components;
use crate::core::RecommendError;
use crate::models::domain::round2;
use crate::models::{Property, Recommendation, ScoringThresholds, ScoringWeights, UserPreferences};

/// Recommendation engine - scores, ranks and explains candidate properties
///
/// # Pipeline
/// 1. Preference validation
/// 2. Per-candidate normalization and component scoring
/// 3. Weighted aggregation and ranking
/// 4. Top-N truncation
/// 5. Reasoning generation for the survivors
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    thresholds: ScoringThresholds,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, thresholds: ScoringThresholds) -> Self {
        Self { weights, thresholds }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ScoringThresholds::default(),
        }
    }

    /// Generate the top-N recommendations for one preference set
    ///
    /// Candidates are scored as given; nothing is filtered out, low
    /// scores simply rank last. Returns at most `top_n` recommendations
    /// ordered by descending total score, ties by ascending property id.
    ///
    /// # Errors
    /// `RecommendError::InvalidArgument` when `top_n` is 0,
    /// `RecommendError::Validation` when the preferences are malformed.
    /// An empty candidate list is not an error.
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
        candidates: Vec<Property>,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.check_request(preferences, top_n)?;

        let current_year = chrono::Utc::now().year();

        let scored = candidates
            .into_iter()
            .map(|property| self.score_candidate(preferences, property, current_year))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.finish(scored, top_n))
    }

    /// Same semantics as [`recommend`](Self::recommend), with candidate
    /// scoring fanned out across the rayon thread pool
    ///
    /// Scoring one property needs no data from any other, so candidates
    /// shard freely; the only shared input is the immutable preference set.
    pub fn recommend_parallel(
        &self,
        preferences: &UserPreferences,
        candidates: Vec<Property>,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.check_request(preferences, top_n)?;

        let current_year = chrono::Utc::now().year();

        let scored = candidates
            .into_par_iter()
            .map(|property| self.score_candidate(preferences, property, current_year))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.finish(scored, top_n))
    }

    /// Score a single candidate without ranking or reasoning
    pub fn score_candidate(
        &self,
        preferences: &UserPreferences,
        property: Property,
        current_year: i32,
    ) -> Result<ScoredProperty, RecommendError> {
        let features = normalize(&property, preferences)?;
        let component_scores =
            score_components(&features, property.year_built, current_year, &self.thresholds);
        let total_score = weighted_total(&component_scores, &self.weights);

        Ok(ScoredProperty {
            property,
            component_scores,
            total_score,
        })
    }

    fn check_request(
        &self,
        preferences: &UserPreferences,
        top_n: usize,
    ) -> Result<(), RecommendError> {
        if top_n == 0 {
            return Err(RecommendError::InvalidArgument(
                "top_n must be at least 1".to_string(),
            ));
        }

        validate_preferences(preferences)
    }

    /// Rank, truncate and explain the scored candidates
    fn finish(&self, mut scored: Vec<ScoredProperty>, top_n: usize) -> Vec<Recommendation> {
        let total_candidates = scored.len();

        rank(&mut scored);
        scored.truncate(top_n);

        tracing::debug!(
            "ranked {} candidates, returning top {}",
            total_candidates,
            scored.len()
        );

        scored
            .into_iter()
            .map(|candidate| {
                let reasoning = generate_reasoning(
                    &candidate.component_scores,
                    candidate.total_score,
                    &self.weights,
                    &self.thresholds,
                );

                Recommendation {
                    property: candidate.property,
                    total_score: round2(candidate.total_score),
                    component_scores: candidate.component_scores.rounded(),
                    reasoning,
                }
            })
            .collect()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
