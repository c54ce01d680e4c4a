use tokio::time::Instant;

use gather_core::{AggregateReport, DataSource, ReportBuilder, Stage, UserId};

use super::{log_finished, log_outcome};

/// Fetch a user's profile, posts and per-post comments strictly one after another.
///
/// Behavior and trade-offs:
/// - Each stage starts only once the previous one has settled; comment fetches
///   run one post at a time, in post order.
/// - A failed stage is recorded and the run continues with a degraded value:
///   no profile, an empty post set, or a post marked with its comment error.
/// - Total latency is the sum of every call's latency.
///
/// Never fails; every stage failure is carried in the returned report. A panic
/// raised by the source propagates to the caller.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "gather::router",
        skip(source, user),
        fields(source = source.name(), user = %user),
    )
)]
pub async fn fetch_sequential(source: &dyn DataSource, user: &UserId) -> AggregateReport {
    let start = Instant::now();
    let mut builder = ReportBuilder::new();

    let profile = source.fetch_profile(user).await;
    log_outcome(Stage::Profile, &profile);
    builder.record_profile(profile);

    let posts = source.fetch_posts(user).await;
    log_outcome(Stage::Posts, &posts);
    let posts = builder.record_posts(posts);

    for post in posts {
        let comments = source.fetch_comments(post.id).await;
        log_outcome(Stage::Comments(post.id), &comments);
        builder.record_comments(post, comments);
    }

    let report = builder.finish(start.elapsed());
    log_finished("sequential", &report);
    report
}
