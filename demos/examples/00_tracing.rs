use gather::Gatherer;
use gather_demos::common::{demo_user, get_source};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,gather=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let gatherer = Gatherer::builder().with_source(get_source()?).build()?;
    let user = demo_user()?;

    // Both strategies, so the spans show where each one waits
    let _ = gatherer.fetch_sequential(&user).await;
    let _ = gatherer.fetch_parallel(&user).await;

    Ok(())
}
