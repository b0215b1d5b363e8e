//! Criterion registry
//!
//! Static table mapping every supported criterion to an optional hard
//! filter and an optional score function. Criteria missing from the table
//! are inert.

use crate::models::BreedProfile;
use serde::Serialize;

/// Hard gate: `false` removes the breed from the results
pub type FilterFn = fn(&BreedProfile, u32) -> bool;

/// Soft preference: how well the breed matches the requested value, in [0, 1]
pub type ScoreFn = fn(&BreedProfile, u32) -> f64;

/// Expected value scale and distance cutoff for the `active` criterion
const ACTIVE_SCALE: f64 = 4.0;
const ACTIVE_CUTOFF: f64 = 3.0;

/// Expected value scale and distance cutoff for the generic trait criteria
const TRAIT_SCALE: f64 = 3.0;
const TRAIT_CUTOFF: f64 = 2.0;

/// The only `childFriendly` value that engages the breed's own rating
const CHILD_FRIENDLY_STRICT: u32 = 2;

/// Every criterion the matcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Size,
    Active,
    Barking,
    ChildFriendly,
    CoatCare,
    Dribbling,
    Home,
    HumanFriendly,
    Loneliness,
    Social,
    Trainability,
    TrainingExperience,
}

/// Registry row for a single criterion
#[derive(Debug, Clone, Copy)]
pub struct CriterionEntry {
    pub criterion: Criterion,
    pub name: &'static str,
    pub filter: Option<FilterFn>,
    pub score: Option<ScoreFn>,
}

static REGISTRY: [CriterionEntry; 12] = [
    CriterionEntry { criterion: Criterion::Size, name: "size", filter: Some(filter_size), score: None },
    CriterionEntry { criterion: Criterion::Active, name: "active", filter: None, score: Some(score_active) },
    CriterionEntry { criterion: Criterion::Barking, name: "barking", filter: None, score: Some(score_barking) },
    CriterionEntry { criterion: Criterion::ChildFriendly, name: "childFriendly", filter: None, score: Some(score_child_friendly) },
    CriterionEntry { criterion: Criterion::CoatCare, name: "coatCare", filter: None, score: Some(score_coat_care) },
    CriterionEntry { criterion: Criterion::Dribbling, name: "dribbling", filter: None, score: Some(score_dribbling) },
    CriterionEntry { criterion: Criterion::Home, name: "home", filter: None, score: Some(score_home) },
    CriterionEntry { criterion: Criterion::HumanFriendly, name: "humanFriendly", filter: None, score: Some(score_human_friendly) },
    CriterionEntry { criterion: Criterion::Loneliness, name: "loneliness", filter: None, score: Some(score_loneliness) },
    CriterionEntry { criterion: Criterion::Social, name: "social", filter: None, score: Some(score_social) },
    CriterionEntry { criterion: Criterion::Trainability, name: "trainability", filter: None, score: Some(score_trainability) },
    CriterionEntry { criterion: Criterion::TrainingExperience, name: "trainingExperience", filter: None, score: Some(score_training_experience) },
];

impl Criterion {
    /// All criteria in registry order
    pub const ALL: [Criterion; 12] = [
        Criterion::Size,
        Criterion::Active,
        Criterion::Barking,
        Criterion::ChildFriendly,
        Criterion::CoatCare,
        Criterion::Dribbling,
        Criterion::Home,
        Criterion::HumanFriendly,
        Criterion::Loneliness,
        Criterion::Social,
        Criterion::Trainability,
        Criterion::TrainingExperience,
    ];

    /// Resolve a submitted key to a criterion
    ///
    /// Matching ignores case and `_`, `-` or space separators, so
    /// `human_friendly`, `HumanFriendly` and `humanfriendly` all resolve
    /// to [`Criterion::HumanFriendly`].
    pub fn from_key(key: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|entry| normalized_eq(key, entry.name))
            .map(|entry| entry.criterion)
    }

    pub fn entry(self) -> &'static CriterionEntry {
        // REGISTRY rows follow the enum declaration order
        &REGISTRY[self as usize]
    }

    /// Canonical identifier, e.g. `coatCare`
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn filter_fn(self) -> Option<FilterFn> {
        self.entry().filter
    }

    pub fn score_fn(self) -> Option<ScoreFn> {
        self.entry().score
    }

    /// The breed's own rating for the trait this criterion targets
    pub fn rating(self, breed: &BreedProfile) -> u8 {
        match self {
            Criterion::Size => breed.size,
            Criterion::Active => breed.active,
            Criterion::Barking => breed.barking,
            Criterion::ChildFriendly => breed.child_friendly,
            Criterion::CoatCare => breed.coat_care,
            Criterion::Dribbling => breed.dribbling,
            Criterion::Home => breed.home,
            Criterion::HumanFriendly => breed.human_friendly,
            Criterion::Loneliness => breed.loneliness,
            Criterion::Social => breed.social,
            Criterion::Trainability => breed.trainability,
            Criterion::TrainingExperience => breed.training_experience,
        }
    }
}

/// Compare a submitted key with a canonical name, ignoring case and separators
fn normalized_eq(key: &str, canonical: &str) -> bool {
    let mut key_chars = key
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase);
    let mut canonical_chars = canonical.chars().flat_map(char::to_lowercase);

    loop {
        match (key_chars.next(), canonical_chars.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

/// Score by distance between the requested value and the value expected
/// from the breed's rating, dropping to zero at `cutoff`
#[inline]
fn proximity_score(value: u32, rating: u8, scale: f64, cutoff: f64) -> f64 {
    let expected = scale * (f64::from(rating) / 5.0);
    let difference = (f64::from(value) - expected).abs();

    if difference < cutoff {
        1.0 / (difference + 1.0)
    } else {
        0.0
    }
}

fn filter_size(breed: &BreedProfile, value: u32) -> bool {
    // 0 -> any size is fine
    value == 0 || u32::from(breed.size) == value
}

fn score_active(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.active, ACTIVE_SCALE, ACTIVE_CUTOFF)
}

fn score_barking(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.barking, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_child_friendly(breed: &BreedProfile, value: u32) -> f64 {
    // 0 and 1 mean "no strict requirement"
    if value == CHILD_FRIENDLY_STRICT {
        f64::from(breed.child_friendly) * 0.2
    } else {
        1.0
    }
}

fn score_coat_care(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.coat_care, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_dribbling(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.dribbling, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_home(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.home, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_human_friendly(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.human_friendly, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_loneliness(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.loneliness, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_social(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.social, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_trainability(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.trainability, TRAIT_SCALE, TRAIT_CUTOFF)
}

fn score_training_experience(breed: &BreedProfile, value: u32) -> f64 {
    proximity_score(value, breed.training_experience, TRAIT_SCALE, TRAIT_CUTOFF)
}
