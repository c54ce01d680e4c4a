use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use gather_core::{PostId, SimulationConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A forced outcome that overrides random fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forced {
    /// The operation always succeeds.
    Succeed,
    /// The operation always fails.
    Fail,
}

/// The simulated operation a fault decision applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A profile fetch.
    Profile,
    /// A posts fetch.
    Posts,
    /// A comment fetch for one post.
    Comments(PostId),
}

/// Deterministic per-operation outcomes.
///
/// Entries take precedence over the random [`FaultPolicy`]. A per-post
/// comment entry beats the `all_comments` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultPlan {
    profile: Option<Forced>,
    posts: Option<Forced>,
    all_comments: Option<Forced>,
    comments: HashMap<PostId, Forced>,
}

impl FaultPlan {
    /// A plan with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A plan under which every operation succeeds.
    #[must_use]
    pub fn never_fail() -> Self {
        Self::new()
            .profile(Forced::Succeed)
            .posts(Forced::Succeed)
            .all_comments(Forced::Succeed)
    }

    /// Force the outcome of every profile fetch.
    #[must_use]
    pub const fn profile(mut self, outcome: Forced) -> Self {
        self.profile = Some(outcome);
        self
    }

    /// Force the outcome of every posts fetch.
    #[must_use]
    pub const fn posts(mut self, outcome: Forced) -> Self {
        self.posts = Some(outcome);
        self
    }

    /// Force the outcome of every comment fetch without a per-post entry.
    #[must_use]
    pub const fn all_comments(mut self, outcome: Forced) -> Self {
        self.all_comments = Some(outcome);
        self
    }

    /// Force the outcome of the comment fetch for `post`.
    #[must_use]
    pub fn comments(mut self, post: PostId, outcome: Forced) -> Self {
        self.comments.insert(post, outcome);
        self
    }

    /// The forced outcome for `op`, if any.
    #[must_use]
    pub fn lookup(&self, op: Operation) -> Option<Forced> {
        match op {
            Operation::Profile => self.profile,
            Operation::Posts => self.posts,
            Operation::Comments(id) => self.comments.get(&id).copied().or(self.all_comments),
        }
    }
}

/// Random fault injection with one probability per operation kind.
///
/// The RNG is seeded from the config when a seed is present, so a fixed seed
/// and a fixed call order yield the same failures on every run.
#[derive(Debug)]
pub struct FaultPolicy {
    profile_rate: f64,
    posts_rate: f64,
    comments_rate: f64,
    rng: Mutex<StdRng>,
}

impl FaultPolicy {
    /// Build a policy from the failure rates and seed of `config`.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            profile_rate: config.profile_failure_rate,
            posts_rate: config.posts_failure_rate,
            comments_rate: config.comments_failure_rate,
            rng: Mutex::new(rng),
        }
    }

    /// Draw whether `op` should fail.
    pub fn should_fail(&self, op: Operation) -> bool {
        let rate = match op {
            Operation::Profile => self.profile_rate,
            Operation::Posts => self.posts_rate,
            Operation::Comments(_) => self.comments_rate,
        };
        if rate <= 0.0 {
            return false;
        }
        if rate >= 1.0 {
            return true;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_bool(rate)
    }
}
