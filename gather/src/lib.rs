//! Gather runs a dependent, multi-stage fetch against a data source and
//! folds every outcome into one report.
//!
//! Overview
//! - Three dependent stages: a user's profile, the user's posts, then the
//!   comments of every post.
//! - Two strategies over the same `DataSource` contract from `gather_core`:
//!   sequential and parallel.
//! - Stage failures never abort a run. Each one becomes a `StageError` plus a
//!   degraded value (no profile, no posts, or a post marked with its comment
//!   error) in the returned `AggregateReport`.
//!
//! Key behaviors and trade-offs
//! - Sequential: one call in flight at a time. Deterministic call order; total
//!   latency is the sum of every call.
//! - Parallel: profile and posts overlap, then all comment fetches overlap.
//!   Comments still wait for posts, so latency is
//!   `max(profile, posts) + max(comments)`.
//! - Fail-fast `user_content`: the first failing call aborts the fetch and is
//!   returned as an error.
//! - `fetch_with_error_handling`: the only entry point that converts a panic
//!   into data (a fatal report); the aggregators let panics propagate.
//! - No timeouts, retries or cancellation: every launched call is awaited.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use gather::{Gatherer, UserId};
//! use gather_mock::SimulatedSource;
//!
//! let gatherer = Gatherer::builder()
//!     .with_source(Arc::new(SimulatedSource::default()))
//!     .build()?;
//! let report = gatherer.fetch(&UserId::new("u1")?).await;
//! for e in &report.errors {
//!     eprintln!("{e}");
//! }
//! ```
//!
//! See the `gather-demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Gatherer, GathererBuilder};
pub use router::content::user_content;
pub use router::parallel::fetch_parallel;
pub use router::recover::fetch_with_error_handling;
pub use router::sequential::fetch_sequential;
pub use router::timing::{run_parallel, run_sequential};

// Re-export core types for convenience
pub use gather_core::{
    AggregateReport, Comment, DataSource, FATAL_MESSAGE, FetchStrategy, GatherConfig, GatherError,
    PARTIAL_FAILURE_MESSAGE, Post, PostComments, PostId, PostWithComments, SUCCESS_MESSAGE,
    SimulationConfig, Stage, StageError, TimedFetch, TimingReport, UserContent, UserId,
    UserProfile,
};
