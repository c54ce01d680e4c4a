//! Report envelopes produced by aggregators and helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{PostWithComments, UserProfile};
use crate::stage::{Stage, StageError};

/// Summary message of a run that recorded no stage errors.
pub const SUCCESS_MESSAGE: &str = "Completed successfully";
/// Summary message of a run that recorded at least one stage error.
pub const PARTIAL_FAILURE_MESSAGE: &str = "Completed with errors (see errors list).";
/// Summary message of a run aborted by a failure outside every stage boundary.
pub const FATAL_MESSAGE: &str = "Failed to fetch data due to a fatal error.";

/// Result of one aggregation run.
///
/// Carries whatever each stage managed to fetch alongside the errors of the
/// stages that failed. `message` is [`PARTIAL_FAILURE_MESSAGE`] exactly when
/// `errors` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Profile, absent if the profile stage failed.
    pub profile: Option<UserProfile>,
    /// Posts in source order, empty if the posts stage failed.
    pub posts: Vec<PostWithComments>,
    /// Stage errors in detection order.
    pub errors: Vec<StageError>,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
    /// Human-readable summary.
    pub message: String,
}

impl AggregateReport {
    /// Report for a run that failed outside every stage boundary.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            profile: None,
            posts: Vec::new(),
            errors: vec![StageError {
                stage: Stage::Fatal,
                message: message.into(),
            }],
            elapsed_ms: 0,
            message: FATAL_MESSAGE.to_string(),
        }
    }

    /// True if any stage recorded an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The first error recorded against `stage`, if any.
    #[must_use]
    pub fn stage_error(&self, stage: Stage) -> Option<&StageError> {
        self.errors.iter().find(|e| e.stage == stage)
    }
}

/// All-or-nothing result of a fail-fast content fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContent {
    /// Profile of the requested user.
    pub user: UserProfile,
    /// Posts, each with its comments loaded.
    pub posts: Vec<PostWithComments>,
}

/// Completion record of a simulated timing fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedFetch {
    /// Caller-supplied task name.
    pub name: String,
    /// Simulated latency in milliseconds.
    pub delay_ms: u64,
    /// Completion timestamp.
    pub time: DateTime<Utc>,
}

/// Results of a batch of timing fetches plus the batch's total duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimingReport {
    /// Completion records in input order.
    pub results: Vec<TimedFetch>,
    /// Total wall-clock duration of the batch in milliseconds.
    pub elapsed_ms: u64,
}
