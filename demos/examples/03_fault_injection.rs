use std::sync::Arc;

use gather::{Gatherer, PostId};
use gather_demos::common::{demo_user, init_tracing, simulation_config};
use gather_demos::render::report_text;
use gather_mock::{FaultPlan, Forced, SimulatedSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Posts 1 and 3 always load; post 2 always fails; the profile stage is down.
    let plan = FaultPlan::new()
        .profile(Forced::Fail)
        .all_comments(Forced::Succeed)
        .comments(PostId(2), Forced::Fail);
    let source = SimulatedSource::new(simulation_config()?)?.with_plan(plan);

    let gatherer = Gatherer::builder()
        .with_source(Arc::new(source))
        .build()?;
    let report = gatherer.fetch(&demo_user()?).await;
    print!("{}", report_text(&report));

    Ok(())
}
