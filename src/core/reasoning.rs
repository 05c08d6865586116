use crate::models::{Component, ComponentScores, ScoringThresholds, ScoringWeights};

/// How many strong components the explanation calls out at most
const MAX_HIGHLIGHTS: usize = 3;

/// Produce a short explanation for one recommendation
///
/// Names up to three of the highest-weighted components that cleared the
/// strong threshold; with none strong, falls back to a generic sentence
/// citing the total score. Advisory text only, never affects ranking.
pub fn generate_reasoning(
    scores: &ComponentScores,
    total_score: f64,
    weights: &ScoringWeights,
    thresholds: &ScoringThresholds,
) -> String {
    let mut strong: Vec<(Component, f64)> = scores
        .iter()
        .filter(|(_, score)| *score >= thresholds.strong_component)
        .collect();

    // Component::ALL already iterates in descending weight order; a stable
    // sort on weight keeps that order for equal weights.
    strong.sort_by(|a, b| {
        b.0.weight(weights)
            .partial_cmp(&a.0.weight(weights))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let highlights: Vec<&'static str> = strong
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|(component, _)| highlight_phrase(*component))
        .collect();

    if highlights.is_empty() {
        return format!(
            "Overall match score of {:.0} out of 100 against your criteria.",
            total_score
        );
    }

    format!("Strong match: {}.", highlights.join(", "))
}

fn highlight_phrase(component: Component) -> &'static str {
    match component {
        Component::PriceMatch => "within your budget",
        Component::Bedroom => "enough bedrooms",
        Component::SchoolRating => "excellent school district",
        Component::Commute => "short commute",
        Component::PropertyAge => "recent construction",
        Component::Amenities => "has your preferred amenities",
    }
}
