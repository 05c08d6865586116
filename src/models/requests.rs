use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserPreferences;

/// Request to generate recommendations
///
/// Intended for callers that deserialize untrusted input before handing
/// it to the engine; the engine re-validates preferences defensively.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub preferences: PreferencesPayload,
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1))]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    3
}

/// Validated preference payload, field-for-field the domain shape
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PreferencesPayload {
    #[validate(range(exclusive_min = 0.0))]
    pub budget: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_min_bedrooms")]
    #[validate(range(min = 1))]
    pub min_bedrooms: u32,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub max_commute_time: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0))]
    pub min_school_rating: Option<f64>,
    #[serde(default)]
    pub preferred_amenities: Vec<String>,
}

fn default_min_bedrooms() -> u32 {
    1
}

impl From<PreferencesPayload> for UserPreferences {
    fn from(payload: PreferencesPayload) -> Self {
        UserPreferences {
            budget: payload.budget,
            location: payload.location,
            min_bedrooms: payload.min_bedrooms,
            max_commute_time: payload.max_commute_time,
            min_school_rating: payload.min_school_rating,
            preferred_amenities: payload.preferred_amenities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{"preferences": {"budget": 500000, "min_bedrooms": 2}, "top_n": 5}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.top_n, 5);
    }

    #[test]
    fn test_top_n_defaults_to_three() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"preferences": {"budget": 500000}}"#).unwrap();

        assert_eq!(request.top_n, 3);
    }

    #[test]
    fn test_zero_budget_fails_validation() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"preferences": {"budget": 0}}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_payload_converts_to_domain_preferences() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{"preferences": {"budget": 350000, "min_bedrooms": 2, "preferred_amenities": ["Pool"]}}"#,
        )
        .unwrap();

        let preferences: UserPreferences = request.preferences.into();
        assert_eq!(preferences.budget, 350_000.0);
        assert_eq!(preferences.min_bedrooms, 2);
        assert_eq!(preferences.preferred_amenities, vec!["Pool".to_string()]);
    }

    #[test]
    fn test_out_of_range_school_rating_fails_validation() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{"preferences": {"budget": 500000, "min_school_rating": 11.0}}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}
