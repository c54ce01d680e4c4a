use gather::Gatherer;
use gather_demos::common::{demo_user, get_source, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let gatherer = Gatherer::builder().with_source(get_source()?).build()?;
    let report = gatherer.fetch(&demo_user()?).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
