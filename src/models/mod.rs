// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Component, ComponentScores, Property, Recommendation, ScoringThresholds, ScoringWeights,
    UserPreferences,
};
pub use requests::{PreferencesPayload, RecommendRequest};
pub use responses::{ErrorResponse, RecommendResponse};
