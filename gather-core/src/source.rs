use async_trait::async_trait;

use crate::types::{Comment, GatherError, Post, PostId, UserId, UserProfile};

/// Focused role trait for sources that provide user profiles.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the profile of `user`.
    async fn profile(&self, user: &UserId) -> Result<UserProfile, GatherError>;
}

/// Focused role trait for sources that provide a user's posts.
#[async_trait]
pub trait PostsProvider: Send + Sync {
    /// Fetch every post authored by `user`, in source order.
    async fn posts(&self, user: &UserId) -> Result<Vec<Post>, GatherError>;
}

/// Focused role trait for sources that provide comments on a post.
#[async_trait]
pub trait CommentsProvider: Send + Sync {
    /// Fetch the comments of `post`, in source order.
    async fn comments(&self, post: PostId) -> Result<Vec<Comment>, GatherError>;
}

/// A data source the aggregators fetch from.
///
/// Capabilities are advertised by returning a role trait object; a source
/// that returns `None` for a role makes the matching stage fail with
/// `GatherError::Unsupported` instead of aborting the run.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// A stable identifier used in logs (e.g. "simulated", "dynamic-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise profile capability.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }

    /// Advertise posts capability.
    fn as_posts_provider(&self) -> Option<&dyn PostsProvider> {
        None
    }

    /// Advertise comments capability.
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        None
    }

    /// Fetch a profile, mapping a missing capability to `Unsupported`.
    ///
    /// # Errors
    /// Returns the provider's error, or `Unsupported` if the source has no profile role.
    async fn fetch_profile(&self, user: &UserId) -> Result<UserProfile, GatherError> {
        match self.as_profile_provider() {
            Some(p) => p.profile(user).await,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(source = self.name(), capability = "profile", "capability not provided");
                Err(GatherError::unsupported("profile"))
            }
        }
    }

    /// Fetch posts, mapping a missing capability to `Unsupported`.
    ///
    /// # Errors
    /// Returns the provider's error, or `Unsupported` if the source has no posts role.
    async fn fetch_posts(&self, user: &UserId) -> Result<Vec<Post>, GatherError> {
        match self.as_posts_provider() {
            Some(p) => p.posts(user).await,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(source = self.name(), capability = "posts", "capability not provided");
                Err(GatherError::unsupported("posts"))
            }
        }
    }

    /// Fetch comments, mapping a missing capability to `Unsupported`.
    ///
    /// # Errors
    /// Returns the provider's error, or `Unsupported` if the source has no comments role.
    async fn fetch_comments(&self, post: PostId) -> Result<Vec<Comment>, GatherError> {
        match self.as_comments_provider() {
            Some(p) => p.comments(post).await,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(source = self.name(), capability = "comments", "capability not provided");
                Err(GatherError::unsupported("comments"))
            }
        }
    }
}
