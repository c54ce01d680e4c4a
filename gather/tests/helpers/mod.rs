#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use gather::{DataSource, GatherError, PostId, SimulationConfig, UserId, UserProfile};
use gather_core::ProfileProvider;
use gather_mock::{FaultPlan, Forced, SimulatedSource};

pub const U1: &str = "u1";

pub fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

pub fn u1() -> UserId {
    user(U1)
}

/// Zero-latency simulated source whose outcomes follow `plan`.
///
/// Random failure rates are all zero, so anything `plan` leaves open succeeds.
pub fn instant_source(plan: FaultPlan) -> Arc<SimulatedSource> {
    Arc::new(
        SimulatedSource::new(SimulationConfig::instant())
            .expect("valid config")
            .with_plan(plan),
    )
}

/// Simulated source with the demo latencies (1000/1500/2000 ms) and no random failures.
pub fn timed_source(plan: FaultPlan) -> Arc<SimulatedSource> {
    let cfg = SimulationConfig {
        comments_failure_rate: 0.0,
        ..SimulationConfig::default()
    };
    Arc::new(
        SimulatedSource::new(cfg)
            .expect("valid config")
            .with_plan(plan),
    )
}

/// Plan that fails the comment fetch of each listed post.
pub fn fail_comments_for(posts: &[u64]) -> FaultPlan {
    posts.iter().fold(FaultPlan::new(), |plan, &id| {
        plan.comments(PostId(id), Forced::Fail)
    })
}

/// A source that can only serve profiles.
pub struct ProfileOnlySource;

#[async_trait]
impl DataSource for ProfileOnlySource {
    fn name(&self) -> &'static str {
        "profile-only"
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
}

#[async_trait]
impl ProfileProvider for ProfileOnlySource {
    async fn profile(&self, user: &UserId) -> Result<UserProfile, GatherError> {
        Ok(UserProfile {
            id: user.clone(),
            name: format!("User {user} Name"),
            email: format!("user{user}@example.com"),
            username: format!("user{user}"),
        })
    }
}
