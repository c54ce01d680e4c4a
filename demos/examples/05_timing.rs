use std::time::Duration;

use gather::{run_parallel, run_sequential};
use gather_demos::common::FAST_ENV;
use gather_demos::render::timing_text;

#[tokio::main]
async fn main() {
    let scale = if std::env::var_os(FAST_ENV).is_some() { 0 } else { 1 };
    let tasks = [
        ("Task A", Duration::from_millis(2000 * scale)),
        ("Task B", Duration::from_millis(1000 * scale)),
        ("Task C", Duration::from_millis(1500 * scale)),
    ];

    let seq = run_sequential(&tasks).await;
    print!("{}", timing_text("Sequential", &seq));

    let par = run_parallel(&tasks).await;
    print!("{}", timing_text("Parallel", &par));
}
