use serde::{Deserialize, Serialize};

use crate::models::domain::Recommendation;

/// Response for a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    pub total_candidates: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Error payload surfaced to presentation collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
