use gather::{FetchStrategy, Gatherer};
use gather_demos::common::{demo_user, get_source, init_tracing};
use gather_demos::render::report_text;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let gatherer = Gatherer::builder()
        .with_source(get_source()?)
        .strategy(FetchStrategy::Sequential)
        .build()?;

    println!("Loading (sequential)...");
    let report = gatherer.fetch(&demo_user()?).await;
    print!("{}", report_text(&report));

    Ok(())
}
