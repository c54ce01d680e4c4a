use gather::Gatherer;
use gather_demos::common::{demo_user, get_source, init_tracing};
use gather_demos::render::report_text;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let gatherer = Gatherer::builder().with_source(get_source()?).build()?;

    // Stage errors are logged at warn; a panic would come back as a fatal report
    let report = gatherer.fetch_with_error_handling(&demo_user()?).await;
    print!("{}", report_text(&report));

    Ok(())
}
