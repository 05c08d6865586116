// Core algorithm exports
pub mod normalize;
pub mod ranking;
pub mod reasoning;
pub mod recommender;
pub mod scoring;

use thiserror::Error;

pub use normalize::{normalize, validate_preferences, NormalizedFeatures};
pub use ranking::{rank, weighted_total, ScoredProperty};
pub use reasoning::generate_reasoning;
pub use recommender::Recommender;
pub use scoring::score_components;

/// Errors raised by the recommendation engine
///
/// Missing optional property or preference fields are never errors; they
/// score neutral instead.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("invalid preferences: {0}")]
    Validation(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
