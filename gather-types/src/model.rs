//! Entities fetched from a data source.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GatherError;

/// Validated user identifier.
///
/// Must be non-empty and contain no whitespace; it is interpolated into
/// display names, emails and post titles by simulated sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a user identifier.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the identifier is empty or contains whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, GatherError> {
        let id = id.into();
        if id.is_empty() {
            return Err(GatherError::InvalidArg("user id must not be empty".into()));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(GatherError::InvalidArg(format!(
                "user id must not contain whitespace: {id:?}"
            )));
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = GatherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Post identifier. Demo sources number posts sequentially from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier the profile was fetched for.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Handle.
    pub username: String,
}

/// A single post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: PostId,
    /// Owning user.
    pub user_id: UserId,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier, unique within its post.
    pub id: u64,
    /// Owning post.
    pub post_id: PostId,
    /// Author handle.
    pub username: String,
    /// Comment text.
    pub text: String,
}

/// Outcome of a post's comment stage.
///
/// A post carries either its comments or the error message of the failed
/// fetch, never both and never neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PostComments {
    /// Comments were fetched successfully (possibly zero of them).
    Loaded {
        /// Fetched comments in source order.
        comments: Vec<Comment>,
    },
    /// The comment fetch failed.
    Failed {
        /// Message of the failure, as recorded in the matching stage error.
        message: String,
    },
}

/// A post extended with the outcome of its comment stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithComments {
    /// The post itself.
    #[serde(flatten)]
    pub post: Post,
    /// Comment stage outcome.
    #[serde(flatten)]
    pub comments: PostComments,
}

impl PostWithComments {
    /// Attach successfully fetched comments to a post.
    #[must_use]
    pub const fn loaded(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            post,
            comments: PostComments::Loaded { comments },
        }
    }

    /// Mark a post's comment stage as failed.
    pub fn failed(post: Post, message: impl Into<String>) -> Self {
        Self {
            post,
            comments: PostComments::Failed {
                message: message.into(),
            },
        }
    }

    /// Post identifier shortcut.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.post.id
    }

    /// Comments of the post; empty when the comment fetch failed.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        match &self.comments {
            PostComments::Loaded { comments } => comments,
            PostComments::Failed { .. } => &[],
        }
    }

    /// Error message of the comment fetch, if it failed.
    #[must_use]
    pub fn comments_error(&self) -> Option<&str> {
        match &self.comments {
            PostComments::Loaded { .. } => None,
            PostComments::Failed { message } => Some(message),
        }
    }
}
