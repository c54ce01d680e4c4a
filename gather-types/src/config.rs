//! Configuration types shared across aggregators and data sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GatherError;

/// Orchestration strategy for the three fetch stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Run every stage, and every post's comment fetch, one after another.
    /// Deterministic ordering at the cost of summed latency.
    Sequential,
    /// Overlap the profile and posts fetches, then fan out all comment fetches.
    /// Total latency is bounded by the slowest branch of each phase.
    #[default]
    Parallel,
}

/// Global configuration for the `Gatherer` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GatherConfig {
    /// Strategy used by `Gatherer::fetch`.
    pub strategy: FetchStrategy,
}

/// Latency and fault-injection settings for a simulated data source.
///
/// Failure rates are probabilities in `[0, 1]`, drawn independently per call.
/// With `seed` set the sequence of injected failures is reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Delay before a profile fetch settles.
    pub profile_latency: Duration,
    /// Delay before a posts fetch settles.
    pub posts_latency: Duration,
    /// Delay before each comment fetch settles.
    pub comments_latency: Duration,
    /// Probability that a profile fetch fails.
    pub profile_failure_rate: f64,
    /// Probability that a posts fetch fails.
    pub posts_failure_rate: f64,
    /// Probability that a comment fetch fails.
    pub comments_failure_rate: f64,
    /// Seed for the fault-injection RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            profile_latency: Duration::from_millis(1000),
            posts_latency: Duration::from_millis(1500),
            comments_latency: Duration::from_millis(2000),
            profile_failure_rate: 0.0,
            posts_failure_rate: 0.0,
            comments_failure_rate: 0.3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Zero latency and no injected failures.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            profile_latency: Duration::ZERO,
            posts_latency: Duration::ZERO,
            comments_latency: Duration::ZERO,
            profile_failure_rate: 0.0,
            posts_failure_rate: 0.0,
            comments_failure_rate: 0.0,
            seed: None,
        }
    }

    /// Builder-style seed setter.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style setter for the comment failure probability.
    #[must_use]
    pub const fn with_comments_failure_rate(mut self, rate: f64) -> Self {
        self.comments_failure_rate = rate;
        self
    }

    /// Check that every failure rate is a probability.
    ///
    /// # Errors
    /// Returns `InvalidArg` naming the first rate outside `[0, 1]` (or NaN).
    pub fn validate(&self) -> Result<(), GatherError> {
        let rates = [
            ("profile_failure_rate", self.profile_failure_rate),
            ("posts_failure_rate", self.posts_failure_rate),
            ("comments_failure_rate", self.comments_failure_rate),
        ];
        for (field, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GatherError::InvalidArg(format!(
                    "{field} must be within [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
