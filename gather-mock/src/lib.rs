//! gather-mock
//!
//! Data sources for tests and demos.
//!
//! - [`SimulatedSource`] reproduces the demo backend: fixed fixtures behind
//!   configurable latencies, with random and forced fault injection.
//! - [`DynamicMockSource`] defers every call to a [`DynamicMockController`]
//!   so tests can script per-user and per-post behaviour.
//! - [`simulated_fetch`] is the standalone timed task used by the timing demo.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gather_core::{
    Comment, CommentsProvider, DataSource, GatherError, Post, PostId, PostsProvider,
    ProfileProvider, SimulationConfig, TimedFetch, UserId, UserProfile,
};

mod dynamic;
mod fault;
mod fixtures;

pub use dynamic::{CallRecord, DynamicMockController, DynamicMockSource, MockBehavior};
pub use fault::{FaultPlan, FaultPolicy, Forced, Operation};

/// Simulated backend with fixed fixtures, latency and fault injection.
///
/// Each operation sleeps for its configured latency and then decides its
/// outcome: a [`FaultPlan`] entry wins, otherwise the [`FaultPolicy`] draws.
#[derive(Debug)]
pub struct SimulatedSource {
    config: SimulationConfig,
    policy: FaultPolicy,
    plan: FaultPlan,
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::from_parts(SimulationConfig::default(), FaultPlan::default())
    }
}

impl SimulatedSource {
    /// Build a source from `config` after validating its failure rates.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a failure rate is outside `[0, 1]`.
    pub fn new(config: SimulationConfig) -> Result<Self, GatherError> {
        config.validate()?;
        Ok(Self::from_parts(config, FaultPlan::default()))
    }

    fn from_parts(config: SimulationConfig, plan: FaultPlan) -> Self {
        let policy = FaultPolicy::from_config(&config);
        Self {
            config,
            policy,
            plan,
        }
    }

    /// Replace the forced-outcome plan.
    #[must_use]
    pub fn with_plan(mut self, plan: FaultPlan) -> Self {
        self.plan = plan;
        self
    }

    /// The active simulation settings.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn should_fail(&self, op: Operation) -> bool {
        match self.plan.lookup(op) {
            Some(Forced::Fail) => true,
            Some(Forced::Succeed) => false,
            None => self.policy.should_fail(op),
        }
    }

    async fn settle(&self, latency: Duration, op: Operation, what: &str) -> Result<(), GatherError> {
        tokio::time::sleep(latency).await;
        if self.should_fail(op) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?op, "injected failure");
            return Err(GatherError::fetch(format!("Failed to fetch {what}")));
        }
        Ok(())
    }
}

#[async_trait]
impl DataSource for SimulatedSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn vendor(&self) -> &'static str {
        "Simulated"
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn as_posts_provider(&self) -> Option<&dyn PostsProvider> {
        Some(self as &dyn PostsProvider)
    }

    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        Some(self as &dyn CommentsProvider)
    }
}

#[async_trait]
impl ProfileProvider for SimulatedSource {
    async fn profile(&self, user: &UserId) -> Result<UserProfile, GatherError> {
        self.settle(self.config.profile_latency, Operation::Profile, "profile")
            .await?;
        Ok(fixtures::profile::for_user(user))
    }
}

#[async_trait]
impl PostsProvider for SimulatedSource {
    async fn posts(&self, user: &UserId) -> Result<Vec<Post>, GatherError> {
        self.settle(self.config.posts_latency, Operation::Posts, "posts")
            .await?;
        Ok(fixtures::posts::for_user(user))
    }
}

#[async_trait]
impl CommentsProvider for SimulatedSource {
    async fn comments(&self, post: PostId) -> Result<Vec<Comment>, GatherError> {
        self.settle(
            self.config.comments_latency,
            Operation::Comments(post),
            "comments",
        )
        .await?;
        Ok(fixtures::comments::for_post(post))
    }
}

/// Sleep for `delay`, then report the task name, its delay and the completion time.
pub async fn simulated_fetch(name: impl Into<String>, delay: Duration) -> TimedFetch {
    let name = name.into();
    tokio::time::sleep(delay).await;
    TimedFetch {
        name,
        delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        time: Utc::now(),
    }
}
