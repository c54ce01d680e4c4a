use std::time::Duration;

use gather_core::TimingReport;
use gather_mock::simulated_fetch;
use tokio::time::Instant;

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Await each simulated fetch in turn; total time is the sum of the delays.
pub async fn run_sequential(tasks: &[(&str, Duration)]) -> TimingReport {
    let start = Instant::now();
    let mut results = Vec::with_capacity(tasks.len());
    for &(name, delay) in tasks {
        results.push(simulated_fetch(name, delay).await);
    }
    TimingReport {
        results,
        elapsed_ms: elapsed_ms(start),
    }
}

/// Await all simulated fetches concurrently; total time is the longest delay.
///
/// Results keep input order regardless of completion order.
pub async fn run_parallel(tasks: &[(&str, Duration)]) -> TimingReport {
    let start = Instant::now();
    let results =
        futures::future::join_all(tasks.iter().map(|&(name, delay)| simulated_fetch(name, delay)))
            .await;
    TimingReport {
        results,
        elapsed_ms: elapsed_ms(start),
    }
}
