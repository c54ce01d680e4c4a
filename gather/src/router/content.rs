use gather_core::{DataSource, GatherError, PostWithComments, UserContent, UserId};

/// Fetch a user's complete content or fail on the first error.
///
/// Profile, then posts, then every post's comments concurrently. Unlike the
/// aggregators, any failing call aborts the whole fetch and its error is
/// returned; pending comment fetches are dropped.
///
/// # Errors
/// Returns the first error raised by any stage.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "gather::router",
        skip(source, user),
        fields(source = source.name(), user = %user),
        err,
    )
)]
pub async fn user_content(source: &dyn DataSource, user: &UserId) -> Result<UserContent, GatherError> {
    let profile = source.fetch_profile(user).await?;
    let posts = source.fetch_posts(user).await?;
    let comments =
        futures::future::try_join_all(posts.iter().map(|p| source.fetch_comments(p.id))).await?;

    Ok(UserContent {
        user: profile,
        posts: posts
            .into_iter()
            .zip(comments)
            .map(|(post, comments)| PostWithComments::loaded(post, comments))
            .collect(),
    })
}
