use std::time::Duration;

use crate::types::{
    AggregateReport, Comment, GatherError, PARTIAL_FAILURE_MESSAGE, Post, PostWithComments,
    SUCCESS_MESSAGE, Stage, StageError, UserProfile,
};

/// A post together with the settled outcome of its comment fetch.
#[derive(Debug, Clone)]
pub struct SettledPost {
    /// The post the comments were fetched for.
    pub post: Post,
    /// Outcome of the comment fetch.
    pub comments: Result<Vec<Comment>, GatherError>,
}

/// Settled outcomes of every stage of one aggregation run.
///
/// `posts` is `Err` when the posts stage itself failed; in that case there
/// are no comment outcomes to report.
#[derive(Debug, Clone)]
pub struct SettledStages {
    /// Outcome of the profile stage.
    pub profile: Result<UserProfile, GatherError>,
    /// Outcome of the posts stage, each post paired with its comment outcome.
    pub posts: Result<Vec<SettledPost>, GatherError>,
}

/// Incremental accumulator for an [`AggregateReport`].
///
/// Stage outcomes are recorded as they settle; errors keep the order in which
/// they were recorded. Pure: no I/O, no clock reads.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    profile: Option<UserProfile>,
    posts: Vec<PostWithComments>,
    errors: Vec<StageError>,
}

impl ReportBuilder {
    /// Start an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the profile stage outcome.
    pub fn record_profile(&mut self, outcome: Result<UserProfile, GatherError>) {
        match outcome {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => self.record_error(StageError::new(Stage::Profile, &e)),
        }
    }

    /// Record the posts stage outcome and return the posts to fetch comments for.
    ///
    /// A failed stage yields an empty post set, so the comment stage runs zero
    /// iterations.
    pub fn record_posts(&mut self, outcome: Result<Vec<Post>, GatherError>) -> Vec<Post> {
        match outcome {
            Ok(posts) => posts,
            Err(e) => {
                self.record_error(StageError::new(Stage::Posts, &e));
                Vec::new()
            }
        }
    }

    /// Record one post's comment outcome, appending the post to the report.
    pub fn record_comments(&mut self, post: Post, outcome: Result<Vec<Comment>, GatherError>) {
        let entry = match outcome {
            Ok(comments) => PostWithComments::loaded(post, comments),
            Err(e) => {
                let err = StageError::new(Stage::Comments(post.id), &e);
                let entry = PostWithComments::failed(post, err.message.clone());
                self.record_error(err);
                entry
            }
        };
        self.posts.push(entry);
    }

    /// Append an already-built stage error.
    pub fn record_error(&mut self, err: StageError) {
        self.errors.push(err);
    }

    /// Seal the report with the run's elapsed time.
    #[must_use]
    pub fn finish(self, elapsed: Duration) -> AggregateReport {
        let message = if self.errors.is_empty() {
            SUCCESS_MESSAGE
        } else {
            PARTIAL_FAILURE_MESSAGE
        };
        AggregateReport {
            profile: self.profile,
            posts: self.posts,
            errors: self.errors,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            message: message.to_string(),
        }
    }
}

/// Merge fully settled stage outcomes into a report.
///
/// Errors are emitted profile first, then posts, then comments in post order.
/// Deterministic given its inputs.
#[must_use]
pub fn build_report(stages: SettledStages, elapsed: Duration) -> AggregateReport {
    let mut builder = ReportBuilder::new();
    builder.record_profile(stages.profile);
    match stages.posts {
        Ok(posts) => {
            for SettledPost { post, comments } in posts {
                builder.record_comments(post, comments);
            }
        }
        Err(e) => {
            let _ = builder.record_posts(Err(e));
        }
    }
    builder.finish(elapsed)
}
