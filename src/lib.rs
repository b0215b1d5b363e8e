//! idealdog - dog breed matching service
//!
//! Ranks a catalog of breed profiles against caller-supplied preference
//! criteria: hard filtering, per-criterion scoring, threshold cut-off and
//! ordering. The matching core in [`crate::core`] is pure; catalogs, HTTP and
//! configuration live around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Criterion, MatchOutcome, Matcher};
pub use models::{BreedProfile, Criteria, MatchConfig, MatchResult};
