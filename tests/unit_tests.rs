// Unit tests for idealdog

use idealdog::core::{
    applicable_criteria, calculate_match_score, passes_filters, rank, round_score, Criterion,
};
use idealdog::models::{coerce_value, BreedProfile, Criteria, MatchConfig, MatchResult};
use serde_json::json;

fn create_breed(id: i64, size: u8) -> BreedProfile {
    BreedProfile {
        id,
        name: format!("Breed {}", id),
        size,
        active: 3,
        barking: 2,
        coat_care: 4,
        dribbling: 1,
        home: 5,
        human_friendly: 5,
        loneliness: 2,
        social: 3,
        trainability: 4,
        training_experience: 1,
        child_friendly: 4,
        ..Default::default()
    }
}

#[test]
fn test_every_criterion_resolves_by_canonical_name() {
    for criterion in Criterion::ALL {
        assert_eq!(Criterion::from_key(criterion.name()), Some(criterion));
    }
}

#[test]
fn test_snake_case_keys_resolve() {
    let pairs = [
        ("coat_care", Criterion::CoatCare),
        ("human_friendly", Criterion::HumanFriendly),
        ("child_friendly", Criterion::ChildFriendly),
        ("training_experience", Criterion::TrainingExperience),
    ];

    for (key, expected) in pairs {
        assert_eq!(Criterion::from_key(key), Some(expected), "key {}", key);
    }
}

#[test]
fn test_size_zero_never_excludes() {
    let criteria: Criteria = [("size", 0)].into_iter().collect();

    for size in 0..=5 {
        assert!(passes_filters(&create_breed(1, size), &criteria));
    }
}

#[test]
fn test_size_nonzero_excludes_other_sizes() {
    for requested in 1..=5u8 {
        let criteria: Criteria = [("size", requested as i64)].into_iter().collect();
        for size in 1..=5u8 {
            assert_eq!(
                passes_filters(&create_breed(1, size), &criteria),
                size == requested,
                "requested {}, breed size {}",
                requested,
                size
            );
        }
    }
}

#[test]
fn test_zero_rating_never_contributes() {
    let mut breed = create_breed(1, 2);
    breed.barking = 0;

    for value in [0, 1, 2, 3, 4, 5, 100] {
        let criteria: Criteria = [("barking", value)].into_iter().collect();
        assert!(applicable_criteria(&breed, &criteria).is_empty());
        assert_eq!(calculate_match_score(&breed, &criteria), 0.0);
    }
}

#[test]
fn test_score_always_in_unit_range() {
    let keys = [
        "size", "active", "barking", "coatCare", "dribbling", "home", "humanFriendly",
        "loneliness", "social", "trainability", "trainingExperience", "childFriendly", "unknown",
    ];
    let values = [json!(0), json!(1), json!(2), json!(5), json!(-7), json!("3"), json!(1e9), json!(null)];

    for (i, value) in values.iter().enumerate() {
        let criteria: Criteria = keys
            .iter()
            .enumerate()
            .map(|(j, key)| (*key, values[(i + j) % values.len()].clone()))
            .chain(std::iter::once(("active", value.clone())))
            .collect();

        for size in 0..=5 {
            let score = calculate_match_score(&create_breed(1, size), &criteria);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}

#[test]
fn test_active_scenario() {
    let breed = BreedProfile {
        id: 1,
        name: "A".to_string(),
        size: 2,
        active: 5,
        barking: 0,
        ..Default::default()
    };
    let criteria: Criteria = [("active", 4), ("barking", 3)].into_iter().collect();

    assert_eq!(calculate_match_score(&breed, &criteria), 1.0);
}

#[test]
fn test_child_friendly_scenario() {
    let breed = BreedProfile {
        id: 1,
        name: "C".to_string(),
        size: 2,
        child_friendly: 3,
        ..Default::default()
    };

    let strict: Criteria = [("childFriendly", 2)].into_iter().collect();
    assert_eq!(calculate_match_score(&breed, &strict), 0.6);

    let relaxed: Criteria = [("childFriendly", 1)].into_iter().collect();
    assert_eq!(calculate_match_score(&breed, &relaxed), 1.0);
}

#[test]
fn test_rank_scenario() {
    let results: Vec<MatchResult> = [0.9, 0.5, 0.1, 0.05, 0.0]
        .into_iter()
        .enumerate()
        .map(|(i, score)| MatchResult {
            breed: create_breed(i as i64 + 1, 1),
            score,
        })
        .collect();

    let ranked = rank(results, &MatchConfig::default());
    let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();

    assert_eq!(scores, vec![0.9, 0.5, 0.1]);
}

#[test]
fn test_coercion_used_by_both_stages() {
    assert_eq!(coerce_value(&json!("-2")), 2);

    let breed = create_breed(1, 2);
    let criteria: Criteria = [("size", json!("-2")), ("home", json!(3.99))]
        .into_iter()
        .collect();

    assert!(passes_filters(&breed, &criteria));
    // home 5 -> expected 3, value 3 -> exact
    assert_eq!(calculate_match_score(&breed, &criteria), 1.0);
}

#[test]
fn test_round_score_three_places() {
    assert_eq!(round_score(0.55555), 0.556);
    assert_eq!(round_score(0.2857142857), 0.286);
}
