use crate::models::{MatchConfig, MatchResult};
use std::cmp::Ordering;

/// Order two results: higher score first, then lower breed id
#[inline]
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.breed.id.cmp(&b.breed.id))
}

/// Rank scored breeds
///
/// 1. Drop results scoring below the threshold (equal is kept)
/// 2. Sort by score descending, ties by breed id ascending
/// 3. Truncate to `match_count` when it is non-zero
pub fn rank(mut results: Vec<MatchResult>, config: &MatchConfig) -> Vec<MatchResult> {
    results.retain(|result| result.score >= config.match_threshold);
    results.sort_by(compare_results);

    if config.match_count > 0 {
        results.truncate(config.match_count);
    }

    results
}
