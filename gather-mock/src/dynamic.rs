use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use gather_core::{
    Comment, CommentsProvider, DataSource, GatherError, Post, PostId, PostsProvider,
    ProfileProvider, UserId, UserProfile,
};

use crate::fault::Operation;

/// Instruction for how a call should behave for a given input.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(GatherError),
    /// Wait, then behave as the inner instruction.
    Delay(Duration, Box<MockBehavior<T>>),
    /// Panic with the given message (simulates a defect inside a source).
    Panic(&'static str),
}

impl<T> MockBehavior<T> {
    /// Wrap `inner` so it settles only after `delay`.
    #[must_use]
    pub fn delayed(delay: Duration, inner: Self) -> Self {
        Self::Delay(delay, Box::new(inner))
    }

    async fn resolve(self) -> Result<T, GatherError> {
        let mut next = self;
        loop {
            match next {
                Self::Return(v) => return Ok(v),
                Self::Fail(e) => return Err(e),
                Self::Delay(d, inner) => {
                    tokio::time::sleep(d).await;
                    next = *inner;
                }
                Self::Panic(msg) => panic!("{msg}"),
            }
        }
    }
}

/// One logged call against the dynamic mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord {
    /// The operation that was invoked.
    pub op: Operation,
    /// When the call started, on the Tokio clock.
    pub started: Instant,
}

#[derive(Default)]
struct InternalState {
    profile_rules: HashMap<UserId, MockBehavior<UserProfile>>,
    posts_rules: HashMap<UserId, MockBehavior<Vec<Post>>>,
    comments_rules: HashMap<PostId, MockBehavior<Vec<Comment>>>,
    calls: Vec<CallRecord>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for profile fetches of `user`.
    pub async fn set_profile_behavior(&self, user: UserId, behavior: MockBehavior<UserProfile>) {
        let mut guard = self.state.lock().await;
        guard.profile_rules.insert(user, behavior);
    }

    /// Set the behavior for posts fetches of `user`.
    pub async fn set_posts_behavior(&self, user: UserId, behavior: MockBehavior<Vec<Post>>) {
        let mut guard = self.state.lock().await;
        guard.posts_rules.insert(user, behavior);
    }

    /// Set the behavior for comment fetches of `post`.
    pub async fn set_comments_behavior(&self, post: PostId, behavior: MockBehavior<Vec<Comment>>) {
        let mut guard = self.state.lock().await;
        guard.comments_rules.insert(post, behavior);
    }

    /// Return a copy of the call log, in call order.
    pub async fn calls(&self) -> Vec<CallRecord> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.profile_rules.clear();
        guard.posts_rules.clear();
        guard.comments_rules.clear();
        guard.calls.clear();
    }
}

/// A data source that defers all behavior to an external controller.
///
/// Calls without a configured rule fail with `NotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn DataSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DataSource>, controller)
    }
}

#[async_trait]
impl DataSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl ProfileProvider for DynamicMockSource {
    async fn profile(&self, user: &UserId) -> Result<UserProfile, GatherError> {
        // Log the call and snapshot the rule without holding the lock across the sleep
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(CallRecord {
                op: Operation::Profile,
                started: Instant::now(),
            });
            guard.profile_rules.get(user).cloned()
        };
        match behavior {
            Some(b) => b.resolve().await,
            None => Err(GatherError::not_found(format!("profile for {user}"))),
        }
    }
}

#[async_trait]
impl PostsProvider for DynamicMockSource {
    async fn posts(&self, user: &UserId) -> Result<Vec<Post>, GatherError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(CallRecord {
                op: Operation::Posts,
                started: Instant::now(),
            });
            guard.posts_rules.get(user).cloned()
        };
        match behavior {
            Some(b) => b.resolve().await,
            None => Err(GatherError::not_found(format!("posts for {user}"))),
        }
    }
}

#[async_trait]
impl CommentsProvider for DynamicMockSource {
    async fn comments(&self, post: PostId) -> Result<Vec<Comment>, GatherError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(CallRecord {
                op: Operation::Comments(post),
                started: Instant::now(),
            });
            guard.comments_rules.get(&post).cloned()
        };
        match behavior {
            Some(b) => b.resolve().await,
            None => Err(GatherError::not_found(format!("comments for post {post}"))),
        }
    }
}
