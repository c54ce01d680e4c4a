pub mod content;
pub mod parallel;
pub mod recover;
pub mod sequential;
pub mod timing;

use gather_core::{AggregateReport, GatherError, Stage};

/// Log one settled stage: `debug` on success, `warn` on failure.
#[cfg(feature = "tracing")]
pub(crate) fn log_outcome<T>(stage: Stage, outcome: &Result<T, GatherError>) {
    match outcome {
        Ok(_) => tracing::debug!(target: "gather::router", %stage, "stage settled"),
        Err(e) => tracing::warn!(target: "gather::router", %stage, error = %e, "stage failed"),
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_outcome<T>(_stage: Stage, _outcome: &Result<T, GatherError>) {}

#[cfg(feature = "tracing")]
pub(crate) fn log_finished(strategy: &'static str, report: &AggregateReport) {
    tracing::info!(
        target: "gather::router",
        strategy,
        elapsed_ms = report.elapsed_ms,
        errors = report.errors.len(),
        "aggregation finished"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_finished(_strategy: &'static str, _report: &AggregateReport) {}
