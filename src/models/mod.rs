// Model exports
pub mod criteria;
pub mod domain;
pub mod responses;

pub use criteria::{coerce_value, Criteria};
pub use domain::{
    BreedProfile, MatchConfig, MatchResult, DEFAULT_MATCH_COUNT, DEFAULT_MATCH_THRESHOLD,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use responses::{CriterionInfo, ErrorResponse, HealthResponse};
