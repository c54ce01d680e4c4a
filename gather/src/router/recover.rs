use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use gather_core::{AggregateReport, DataSource, UserId};

use super::parallel::fetch_parallel;

/// Run the parallel aggregator and convert an escaping panic into a fatal report.
///
/// Stage failures pass through untouched (and are logged at `warn`). A panic
/// unwinding out of the aggregator yields [`AggregateReport::fatal`] carrying
/// the panic message.
pub async fn fetch_with_error_handling(source: &dyn DataSource, user: &UserId) -> AggregateReport {
    match AssertUnwindSafe(fetch_parallel(source, user))
        .catch_unwind()
        .await
    {
        Ok(report) => {
            #[cfg(feature = "tracing")]
            if report.has_errors() {
                tracing::warn!(
                    target: "gather::router",
                    user = %user,
                    errors = report.errors.len(),
                    "aggregation completed with errors"
                );
            }
            report
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            #[cfg(feature = "tracing")]
            tracing::error!(target: "gather::router", user = %user, panic = %msg, "aggregation aborted");
            AggregateReport::fatal(msg)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
