use serde::{Deserialize, Serialize};

/// Minimum match score (0-1) a breed needs to make it into the result list
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.1;

/// Maximum number of breeds in the result list, 0 for unlimited
pub const DEFAULT_MATCH_COUNT: usize = 0;

/// Catalog size from which breeds are evaluated in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// One breed from the catalog
///
/// Ratings use a 0-5 scale where 0 means the trait is unknown or does not
/// apply to the breed, which is not the same as a low rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedProfile {
    pub id: i64,
    pub name: String,
    pub size: u8,
    #[serde(default)]
    pub size_exact: Option<String>,
    #[serde(default)]
    pub weight_exact: Option<String>,
    #[serde(default)]
    pub lifetime_exact: Option<String>,
    #[serde(default)]
    pub playfulness: u8,
    #[serde(default)]
    pub energy: u8,
    #[serde(default)]
    pub movement_intensity: u8,
    #[serde(default)]
    pub active: u8,
    #[serde(default)]
    pub coat_care: u8,
    #[serde(default)]
    pub dribbling: u8,
    #[serde(default)]
    pub moulting: u8,
    #[serde(default)]
    pub devotion: u8,
    #[serde(default)]
    pub human_friendly: u8,
    #[serde(default)]
    pub social: u8,
    #[serde(default)]
    pub small_animals_friendly: u8,
    #[serde(default)]
    pub child_friendly: u8,
    #[serde(default)]
    pub trainability: u8,
    #[serde(default)]
    pub training_experience: u8,
    #[serde(default)]
    pub home: u8,
    #[serde(default)]
    pub barking: u8,
    #[serde(default)]
    pub loneliness: u8,
    #[serde(default)]
    pub hunting_instinct: u8,
}

/// A breed paired with how closely it matches the submitted criteria
///
/// Serializes as every breed attribute plus a `match` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub breed: BreedProfile,
    #[serde(rename = "match")]
    pub score: f64,
}

/// Tunables for the rank stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Minimum score to appear in the results (inclusive)
    pub match_threshold: f64,
    /// Maximum number of results, 0 for unlimited
    pub match_count: usize,
    /// Catalog size at which breeds are evaluated on the rayon pool, 0 disables it
    pub parallel_threshold: usize,
}

impl MatchConfig {
    /// Negative or NaN thresholds are raised to 0.
    pub fn new(match_threshold: f64, match_count: usize) -> Self {
        Self {
            match_threshold: match_threshold.max(0.0),
            match_count,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD, DEFAULT_MATCH_COUNT)
    }
}
