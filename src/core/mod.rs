// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod registry;
pub mod scoring;

pub use filters::passes_filters;
pub use matcher::{MatchOutcome, Matcher};
pub use ranking::{compare_results, rank};
pub use registry::{Criterion, CriterionEntry, FilterFn, ScoreFn};
pub use scoring::{applicable_criteria, calculate_match_score, round_score};
