use crate::core::registry::Criterion;
use crate::models::{coerce_value, BreedProfile, Criteria};

/// Check if a breed passes every hard filter in the criteria
///
/// Only criteria with a registered filter take part; everything else
/// imposes no constraint. The breed's own ratings are never consulted to
/// decide whether a filter applies.
#[inline]
pub fn passes_filters(breed: &BreedProfile, criteria: &Criteria) -> bool {
    criteria.iter().all(|(key, value)| {
        match Criterion::from_key(key).and_then(Criterion::filter_fn) {
            Some(filter) => filter(breed, coerce_value(value)),
            None => true,
        }
    })
}
