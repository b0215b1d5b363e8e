use crate::core::{filters::passes_filters, ranking::rank, scoring::calculate_match_score};
use crate::models::{BreedProfile, Criteria, MatchConfig, MatchResult};
use rayon::prelude::*;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_breeds: usize,
    pub filtered_out: usize,
}

/// Main matching orchestrator - runs the breed matching pipeline
///
/// # Pipeline Stages
/// 1. Hard filtering (per breed)
/// 2. Scoring (per breed)
/// 3. Threshold, ordering and truncation (once, over all scored breeds)
///
/// Stages 1 and 2 touch a single breed at a time, so large catalogs are
/// evaluated on the rayon pool. Ranking always runs after every score is
/// known, which keeps the output identical to a sequential run.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank the catalog against the submitted criteria
    ///
    /// # Arguments
    /// * `criteria` - Raw criteria from the request
    /// * `breeds` - The full catalog snapshot
    ///
    /// # Returns
    /// MatchOutcome with the ordered matches and stage counts
    pub fn find_matches(&self, criteria: &Criteria, breeds: Vec<BreedProfile>) -> MatchOutcome {
        let total_breeds = breeds.len();
        let parallel =
            self.config.parallel_threshold > 0 && total_breeds >= self.config.parallel_threshold;

        let scored: Vec<MatchResult> = if parallel {
            breeds
                .into_par_iter()
                .filter_map(|breed| evaluate(breed, criteria))
                .collect()
        } else {
            breeds
                .into_iter()
                .filter_map(|breed| evaluate(breed, criteria))
                .collect()
        };

        let filtered_out = total_breeds - scored.len();
        tracing::debug!(
            "Scored {} of {} breeds ({} filtered out, parallel: {})",
            scored.len(),
            total_breeds,
            filtered_out,
            parallel
        );

        let matches = rank(scored, &self.config);
        tracing::debug!(
            "Ranked {} matches (threshold: {}, count: {})",
            matches.len(),
            self.config.match_threshold,
            self.config.match_count
        );

        MatchOutcome {
            matches,
            total_breeds,
            filtered_out,
        }
    }
}

/// Filter then score a single breed
#[inline]
fn evaluate(breed: BreedProfile, criteria: &Criteria) -> Option<MatchResult> {
    if !passes_filters(&breed, criteria) {
        return None;
    }

    let score = calculate_match_score(&breed, criteria);
    Some(MatchResult { breed, score })
}
