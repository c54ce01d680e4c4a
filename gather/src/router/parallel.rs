use tokio::time::Instant;

use gather_core::{
    AggregateReport, DataSource, SettledPost, SettledStages, Stage, UserId, build_report,
};

use super::{log_finished, log_outcome};

/// Fetch a user's profile, posts and per-post comments with overlapping stages.
///
/// Behavior and trade-offs:
/// - Profile and posts are fetched concurrently and both are awaited to
///   settlement; one failing never cancels or delays the other.
/// - Once posts have settled, one comment fetch per post runs concurrently;
///   all are awaited before any outcome is inspected.
/// - Comment fetches never start before the posts stage settled, so total
///   latency is `max(profile, posts) + max(comments)`.
///
/// All concurrency is cooperative within the calling task; nothing is spawned.
/// Never fails; a panic raised by the source propagates to the caller.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "gather::router",
        skip(source, user),
        fields(source = source.name(), user = %user),
    )
)]
pub async fn fetch_parallel(source: &dyn DataSource, user: &UserId) -> AggregateReport {
    let start = Instant::now();

    let (profile, posts) = tokio::join!(source.fetch_profile(user), source.fetch_posts(user));
    log_outcome(Stage::Profile, &profile);
    log_outcome(Stage::Posts, &posts);

    let posts = match posts {
        Ok(posts) => {
            let outcomes =
                futures::future::join_all(posts.iter().map(|p| source.fetch_comments(p.id))).await;
            Ok(posts
                .into_iter()
                .zip(outcomes)
                .map(|(post, comments)| {
                    log_outcome(Stage::Comments(post.id), &comments);
                    SettledPost { post, comments }
                })
                .collect())
        }
        Err(e) => Err(e),
    };

    let report = build_report(SettledStages { profile, posts }, start.elapsed());
    log_finished("parallel", &report);
    report
}
