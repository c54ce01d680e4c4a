use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GatherError;
use crate::model::PostId;

/// Fetch stage an error is scoped to.
///
/// Renders as `profile`, `posts`, `comments:<postId>` or `fatal` and is
/// serialized as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stage {
    /// Profile fetch for the requested user.
    Profile,
    /// Posts fetch for the requested user.
    Posts,
    /// Comment fetch for one post.
    Comments(PostId),
    /// A failure that escaped every stage boundary.
    Fatal,
}

impl Stage {
    /// Operation label without the post identifier, for capability errors and logs.
    #[must_use]
    pub const fn capability(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Posts => "posts",
            Self::Comments(_) => "comments",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comments(id) => write!(f, "comments:{id}"),
            other => f.write_str(other.capability()),
        }
    }
}

impl FromStr for Stage {
    type Err = GatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(Self::Profile),
            "posts" => Ok(Self::Posts),
            "fatal" => Ok(Self::Fatal),
            other => other
                .strip_prefix("comments:")
                .and_then(|id| id.parse::<u64>().ok())
                .map(|id| Self::Comments(PostId(id)))
                .ok_or_else(|| GatherError::InvalidArg(format!("unknown stage: {other:?}"))),
        }
    }
}

impl TryFrom<String> for Stage {
    type Error = GatherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.to_string()
    }
}

/// A failure recorded against one stage of an aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageError {
    /// Stage the failure is scoped to.
    pub stage: Stage,
    /// Human-readable failure message.
    pub message: String,
}

impl StageError {
    /// Record `err` against `stage`, keeping its display message.
    #[must_use]
    pub fn new(stage: Stage, err: &GatherError) -> Self {
        Self {
            stage,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)
    }
}
