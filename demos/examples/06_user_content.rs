use gather::Gatherer;
use gather_demos::common::{demo_user, get_source, init_tracing};
use gather_demos::render::content_text;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let gatherer = Gatherer::builder().with_source(get_source()?).build()?;

    println!("=== Fetching all user content ===");
    match gatherer.user_content(&demo_user()?).await {
        Ok(content) => print!("{}", content_text(&content)),
        // Any failing call aborts the whole fetch
        Err(e) => println!("Failed to fetch user content: {e}"),
    }

    Ok(())
}
