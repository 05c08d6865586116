use serde::{Deserialize, Serialize};

/// Property listing as provided by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqft: u32,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub school_rating: Option<f64>,
    #[serde(default)]
    pub commute_time: Option<f64>,
}

/// Buyer preferences for one recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub budget: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_min_bedrooms")]
    pub min_bedrooms: u32,
    #[serde(default)]
    pub max_commute_time: Option<f64>,
    #[serde(default)]
    pub min_school_rating: Option<f64>,
    #[serde(default)]
    pub preferred_amenities: Vec<String>,
}

fn default_min_bedrooms() -> u32 {
    1
}

/// The six criteria a property is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    PriceMatch,
    Bedroom,
    SchoolRating,
    Commute,
    PropertyAge,
    Amenities,
}

impl Component {
    /// All components in descending weight order (declaration order breaks ties)
    pub const ALL: [Component; 6] = [
        Component::PriceMatch,
        Component::Bedroom,
        Component::SchoolRating,
        Component::Commute,
        Component::PropertyAge,
        Component::Amenities,
    ];

    pub fn weight(self, weights: &ScoringWeights) -> f64 {
        match self {
            Component::PriceMatch => weights.price_match,
            Component::Bedroom => weights.bedroom,
            Component::SchoolRating => weights.school_rating,
            Component::Commute => weights.commute,
            Component::PropertyAge => weights.property_age,
            Component::Amenities => weights.amenities,
        }
    }

    pub fn score(self, scores: &ComponentScores) -> f64 {
        match self {
            Component::PriceMatch => scores.price_match,
            Component::Bedroom => scores.bedroom,
            Component::SchoolRating => scores.school_rating,
            Component::Commute => scores.commute,
            Component::PropertyAge => scores.property_age,
            Component::Amenities => scores.amenities,
        }
    }
}

/// Per-criterion sub-scores, each in [0, 100]
///
/// Every field is always populated; criteria with no data behind them
/// carry a neutral score rather than being omitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentScores {
    pub price_match: f64,
    pub bedroom: f64,
    pub school_rating: f64,
    pub commute: f64,
    pub property_age: f64,
    pub amenities: f64,
}

impl ComponentScores {
    /// Iterate components with their scores, descending weight order
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, c.score(self)))
    }

    /// Round every field to two decimals for presentation
    pub fn rounded(self) -> Self {
        Self {
            price_match: round2(self.price_match),
            bedroom: round2(self.bedroom),
            school_rating: round2(self.school_rating),
            commute: round2(self.commute),
            property_age: round2(self.property_age),
            amenities: round2(self.amenities),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scored property returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub property: Property,
    pub total_score: f64,
    pub component_scores: ComponentScores,
    pub reasoning: String,
}

/// Relative importance of each component in the total score
///
/// Weights are fractions summing to 1.0, applied to 0-100 component scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub price_match: f64,
    pub bedroom: f64,
    pub school_rating: f64,
    pub commute: f64,
    pub property_age: f64,
    pub amenities: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price_match: 0.30,
            bedroom: 0.20,
            school_rating: 0.15,
            commute: 0.15,
            property_age: 0.10,
            amenities: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.price_match
            + self.bedroom
            + self.school_rating
            + self.commute
            + self.property_age
            + self.amenities
    }
}

/// Decay spans and cutoffs used by the component scorer
///
/// Hoisted into one named struct so they are adjustable and testable
/// without touching scoring logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Price ratio at which price_match bottoms out at 0 (2.0 = twice the budget)
    pub price_ceiling_ratio: f64,
    /// Points deducted per bedroom short of the minimum
    pub bedroom_shortfall_step: f64,
    /// Rating points below the minimum at which school_rating reaches 0
    pub school_floor_span: f64,
    /// Minutes past the commute ceiling at which commute reaches 0
    pub commute_grace_minutes: f64,
    /// Property age in years at which the age score reaches its floor
    pub age_horizon_years: f64,
    /// Lowest age score an old property can receive
    pub age_floor_score: f64,
    /// Age score when year_built is unknown
    pub age_unknown_score: f64,
    /// Component score at or above which reasoning calls a criterion out
    pub strong_component: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            price_ceiling_ratio: 2.0,
            bedroom_shortfall_step: 50.0,
            school_floor_span: 3.0,
            commute_grace_minutes: 30.0,
            age_horizon_years: 50.0,
            age_floor_score: 50.0,
            age_unknown_score: 70.0,
            strong_component: 80.0,
        }
    }
}
