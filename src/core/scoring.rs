use crate::core::registry::Criterion;
use crate::models::{coerce_value, BreedProfile, Criteria};
use std::collections::BTreeMap;

/// Round a per-criterion score to 3 decimal places, half away from zero
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Collect the criteria that count towards a breed's score, with their
/// coerced values
///
/// A criterion applies when it has a score function and the breed's own
/// rating for it is non-zero. When several keys resolve to the same
/// criterion the last one in key order wins.
pub fn applicable_criteria(breed: &BreedProfile, criteria: &Criteria) -> BTreeMap<Criterion, u32> {
    criteria
        .iter()
        .filter_map(|(key, value)| Criterion::from_key(key).map(|c| (c, value)))
        .filter(|(criterion, _)| criterion.rating(breed) != 0)
        .filter(|(criterion, _)| criterion.score_fn().is_some())
        .map(|(criterion, value)| (criterion, coerce_value(value)))
        .collect()
}

/// Calculate the aggregate match score (0-1) for a breed
///
/// The mean of the rounded applicable criterion scores, or 0.0 when no
/// criterion applies.
pub fn calculate_match_score(breed: &BreedProfile, criteria: &Criteria) -> f64 {
    let scores: Vec<f64> = applicable_criteria(breed, criteria)
        .into_iter()
        .filter_map(|(criterion, value)| {
            criterion
                .score_fn()
                .map(|score| round_score(score(breed, value)))
        })
        .collect();

    if scores.is_empty() {
        return 0.0;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    average.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_breed() -> BreedProfile {
        BreedProfile {
            id: 1,
            name: "Test Breed".to_string(),
            size: 2,
            active: 5,
            barking: 0,
            child_friendly: 3,
            home: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(1.0 / 3.0), 0.333);
        assert_eq!(round_score(0.6000000000000001), 0.6);
        assert_eq!(round_score(0.0005), 0.001);
        assert_eq!(round_score(1.0), 1.0);
    }

    #[test]
    fn test_zero_rating_excluded() {
        let breed = create_test_breed();
        let criteria: Criteria = [("active", 4), ("barking", 3)].into_iter().collect();

        let applicable = applicable_criteria(&breed, &criteria);
        assert_eq!(applicable.len(), 1);
        assert_eq!(applicable.get(&Criterion::Active), Some(&4));

        assert_eq!(calculate_match_score(&breed, &criteria), 1.0);
    }

    #[test]
    fn test_filter_only_criterion_excluded() {
        let breed = create_test_breed();
        let criteria: Criteria = [("size", 2)].into_iter().collect();

        assert!(applicable_criteria(&breed, &criteria).is_empty());
        assert_eq!(calculate_match_score(&breed, &criteria), 0.0);
    }

    #[test]
    fn test_empty_criteria_scores_zero() {
        assert_eq!(calculate_match_score(&create_test_breed(), &Criteria::new()), 0.0);
    }

    #[test]
    fn test_average_of_rounded_scores() {
        let breed = create_test_breed();
        // active: expected 4, diff 2 -> 0.333; home: expected 3, diff 0 -> 1.0
        let criteria: Criteria = [("active", 2), ("home", 3)].into_iter().collect();

        let score = calculate_match_score(&breed, &criteria);
        assert!((score - (0.333 + 1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_child_friendly_contribution() {
        let breed = create_test_breed();

        let strict: Criteria = [("childFriendly", 2)].into_iter().collect();
        assert_eq!(calculate_match_score(&breed, &strict), 0.6);

        let relaxed: Criteria = [("child_friendly", 1)].into_iter().collect();
        assert_eq!(calculate_match_score(&breed, &relaxed), 1.0);
    }

    #[test]
    fn test_duplicate_keys_count_once() {
        let breed = create_test_breed();
        // "Active" sorts before "active"; the later key wins
        let criteria: Criteria = [("Active", json!(1)), ("active", json!(4))]
            .into_iter()
            .collect();

        let applicable = applicable_criteria(&breed, &criteria);
        assert_eq!(applicable.len(), 1);
        assert_eq!(applicable.get(&Criterion::Active), Some(&4));
        assert_eq!(calculate_match_score(&breed, &criteria), 1.0);
    }

    #[test]
    fn test_out_of_scale_rating_clamped() {
        let mut breed = create_test_breed();
        breed.child_friendly = 9;
        let criteria: Criteria = [("childFriendly", 2)].into_iter().collect();

        assert_eq!(calculate_match_score(&breed, &criteria), 1.0);
    }
}
