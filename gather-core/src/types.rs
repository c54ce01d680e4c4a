//! Re-export of foundational types from `gather-types`.
// Consolidated so downstream crates can depend on `gather-core` only

pub use gather_types::{FetchStrategy, GatherConfig, GatherError, SimulationConfig};

pub use gather_types::{Comment, Post, PostComments, PostId, PostWithComments, UserId, UserProfile};

pub use gather_types::{Stage, StageError};

pub use gather_types::{
    AggregateReport, FATAL_MESSAGE, PARTIAL_FAILURE_MESSAGE, SUCCESS_MESSAGE, TimedFetch,
    TimingReport, UserContent,
};
