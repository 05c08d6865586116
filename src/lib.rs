//! HomeMatch Algo - property recommendation engine for the HomeMatch platform
//!
//! This library provides the scoring core used to recommend properties to a
//! buyer: per-criterion component scores, a weighted total, deterministic
//! ranking and short human-readable reasoning.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use core::{RecommendError, Recommender};
pub use models::{
    ComponentScores, Property, Recommendation, RecommendRequest, RecommendResponse,
    ScoringThresholds, ScoringWeights, UserPreferences,
};
