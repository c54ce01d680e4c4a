//! gather-core
//!
//! Contracts and pure helpers shared across the gather ecosystem.
//!
//! - `types`: re-exported data model, stage errors, reports and configuration.
//! - `source`: the `DataSource` trait and its per-operation role traits.
//! - `report`: the report builder merging settled stage outcomes.
//!
//! Nothing in this crate performs I/O or depends on an async runtime; data
//! source implementations and aggregators live in `gather-mock` and `gather`.
#![warn(missing_docs)]

/// Report builder merging settled stage outcomes into an `AggregateReport`.
pub mod report;
/// Data source role traits and the primary `DataSource` interface.
pub mod source;
pub mod types;

pub use report::{ReportBuilder, SettledPost, SettledStages, build_report};
pub use source::{CommentsProvider, DataSource, PostsProvider, ProfileProvider};
pub use types::*;
