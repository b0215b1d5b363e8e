// Criterion benchmarks for idealdog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idealdog::core::{calculate_match_score, passes_filters, Matcher};
use idealdog::models::{BreedProfile, Criteria, MatchConfig};
use serde_json::json;

fn create_breed(id: usize) -> BreedProfile {
    BreedProfile {
        id: id as i64,
        name: format!("Breed {}", id),
        size: 1 + (id % 3) as u8,
        active: (id % 6) as u8,
        barking: ((id / 2) % 6) as u8,
        coat_care: ((id / 3) % 6) as u8,
        home: ((id / 5) % 6) as u8,
        human_friendly: ((id / 7) % 6) as u8,
        social: ((id / 11) % 6) as u8,
        child_friendly: ((id / 13) % 6) as u8,
        ..Default::default()
    }
}

fn create_criteria() -> Criteria {
    [
        ("size", json!(2)),
        ("active", json!(4)),
        ("barking", json!("1")),
        ("coat_care", json!(2)),
        ("home", json!(3)),
        ("humanFriendly", json!(3)),
        ("social", json!(2)),
        ("childFriendly", json!(2)),
    ]
    .into_iter()
    .collect()
}

fn bench_single_breed(c: &mut Criterion) {
    let breed = create_breed(42);
    let criteria = create_criteria();

    c.bench_function("filter_and_score_single_breed", |b| {
        b.iter(|| {
            let breed = black_box(&breed);
            let criteria = black_box(&criteria);
            passes_filters(breed, criteria).then(|| calculate_match_score(breed, criteria))
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let criteria = create_criteria();

    let mut group = c.benchmark_group("matching");

    for breed_count in [10, 100, 1000, 10000].iter() {
        let breeds: Vec<BreedProfile> = (0..*breed_count).map(create_breed).collect();

        for (label, parallel_threshold) in [("sequential", 0), ("parallel", 1)] {
            let matcher = Matcher::new(
                MatchConfig::default().with_parallel_threshold(parallel_threshold),
            );

            group.bench_with_input(
                BenchmarkId::new(label, breed_count),
                breed_count,
                |b, _| {
                    b.iter(|| {
                        matcher.find_matches(black_box(&criteria), black_box(breeds.clone()))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_breed, bench_matching);

criterion_main!(benches);
