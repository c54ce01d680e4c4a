use std::time::Duration;

use gather::{run_parallel, run_sequential};

const TASKS: [(&str, Duration); 3] = [
    ("Task A", Duration::from_millis(2000)),
    ("Task B", Duration::from_millis(1000)),
    ("Task C", Duration::from_millis(1500)),
];

fn names(r: &gather::TimingReport) -> Vec<&str> {
    r.results.iter().map(|t| t.name.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn sequential_sums_delays() {
    let r = run_sequential(&TASKS).await;
    assert_eq!(names(&r), ["Task A", "Task B", "Task C"]);
    assert!(r.elapsed_ms >= 4500 && r.elapsed_ms < 4600, "elapsed was {}", r.elapsed_ms);
    assert_eq!(r.results[1].delay_ms, 1000);
}

#[tokio::test(start_paused = true)]
async fn parallel_takes_the_longest_delay_and_keeps_input_order() {
    let r = run_parallel(&TASKS).await;
    // Task B completes first but stays in its input slot
    assert_eq!(names(&r), ["Task A", "Task B", "Task C"]);
    assert!(r.elapsed_ms >= 2000 && r.elapsed_ms < 2100, "elapsed was {}", r.elapsed_ms);
}

#[test]
fn empty_batch_is_immediate() {
    let r = tokio_test::block_on(run_parallel(&[]));
    assert!(r.results.is_empty());
}
