//! Gather-specific data transfer objects, stage errors and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod reports;
mod stage;

pub use config::{FetchStrategy, GatherConfig, SimulationConfig};
pub use error::GatherError;
pub use model::{Comment, Post, PostComments, PostId, PostWithComments, UserId, UserProfile};
pub use reports::{
    AggregateReport, FATAL_MESSAGE, PARTIAL_FAILURE_MESSAGE, SUCCESS_MESSAGE, TimedFetch,
    TimingReport, UserContent,
};
pub use stage::{Stage, StageError};
