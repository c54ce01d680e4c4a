use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gather workspace.
///
/// Data sources report failures with this type; aggregators convert each one
/// into a [`crate::StageError`] at the stage boundary where it occurred.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GatherError {
    /// A data source operation failed. The message is surfaced verbatim in reports.
    #[error("{0}")]
    Fetch(String),

    /// The data source does not implement the requested operation.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Operation label (e.g. "profile", "posts", "comments").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A user or post could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "profile for u1".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GatherError {
    /// Helper: build a `Fetch` error from a message.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
