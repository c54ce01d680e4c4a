use std::time::Duration;

use gather::{
    PARTIAL_FAILURE_MESSAGE, PostId, SUCCESS_MESSAGE, Stage, UserProfile, fetch_parallel,
};
use gather_mock::{DynamicMockSource, FaultPlan, Forced, MockBehavior};

use crate::helpers::{fail_comments_for, instant_source, timed_source, u1};

#[tokio::test]
async fn u1_all_success() {
    let src = instant_source(FaultPlan::new());
    let r = fetch_parallel(&*src, &u1()).await;

    assert_eq!(
        r.profile.as_ref().map(|p| p.username.as_str()),
        Some("useru1")
    );
    assert_eq!(r.posts.len(), 3);
    for p in &r.posts {
        assert_eq!(p.comments().len(), 3);
        assert!(p.comments().iter().all(|c| c.post_id == p.id()));
    }
    assert!(r.errors.is_empty());
    assert_eq!(r.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn only_post_two_fails() {
    let src = instant_source(fail_comments_for(&[2]));
    let r = fetch_parallel(&*src, &u1()).await;

    let with_comments: Vec<PostId> = r
        .posts
        .iter()
        .filter(|p| !p.comments().is_empty())
        .map(|p| p.id())
        .collect();
    assert_eq!(with_comments, [PostId(1), PostId(3)]);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Comments(PostId(2)));
    assert_eq!(r.message, PARTIAL_FAILURE_MESSAGE);
}

#[tokio::test]
async fn every_comment_fetch_fails_in_post_order() {
    let src = instant_source(FaultPlan::new().all_comments(Forced::Fail));
    let r = fetch_parallel(&*src, &u1()).await;

    assert_eq!(r.errors.len(), 3);
    let stages: Vec<Stage> = r.errors.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        [
            Stage::Comments(PostId(1)),
            Stage::Comments(PostId(2)),
            Stage::Comments(PostId(3)),
        ]
    );
    assert!(
        r.posts
            .iter()
            .all(|p| p.comments_error() == Some("Failed to fetch comments"))
    );
}

#[tokio::test]
async fn posts_failure_means_no_comment_errors() {
    let src = instant_source(FaultPlan::new().posts(Forced::Fail).all_comments(Forced::Fail));
    let r = fetch_parallel(&*src, &u1()).await;

    assert!(r.profile.is_some());
    assert!(r.posts.is_empty());
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Posts);
}

#[tokio::test]
async fn profile_failure_keeps_posts() {
    let src = instant_source(FaultPlan::new().profile(Forced::Fail));
    let r = fetch_parallel(&*src, &u1()).await;

    assert!(r.profile.is_none());
    assert_eq!(r.posts.len(), 3);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Profile);
    assert_eq!(r.errors[0].message, "Failed to fetch profile");
}

#[tokio::test(start_paused = true)]
async fn elapsed_recorded_when_every_stage_fails() {
    let src = timed_source(FaultPlan::new().profile(Forced::Fail).posts(Forced::Fail));
    let r = fetch_parallel(&*src, &u1()).await;

    assert_eq!(r.errors.len(), 2);
    assert_eq!(r.errors[0].stage, Stage::Profile);
    assert_eq!(r.errors[1].stage, Stage::Posts);
    // the two stages overlap: max(1000, 1500)
    assert!(r.elapsed_ms >= 1500 && r.elapsed_ms < 1600, "elapsed was {}", r.elapsed_ms);
}

#[tokio::test(start_paused = true)]
async fn slow_failing_profile_does_not_hold_back_posts() {
    let (src, ctl) = DynamicMockSource::new_with_controller("par");
    ctl.set_profile_behavior(
        u1(),
        MockBehavior::<UserProfile>::delayed(
            Duration::from_millis(500),
            MockBehavior::Fail(gather::GatherError::fetch("profile down")),
        ),
    )
    .await;
    ctl.set_posts_behavior(u1(), MockBehavior::Return(vec![])).await;

    let r = fetch_parallel(&*src, &u1()).await;
    assert!(r.profile.is_none());
    assert!(r.posts.is_empty());
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].message, "profile down");

    let calls = ctl.calls().await;
    assert_eq!(calls.len(), 2);
    // both stage calls started at the same instant
    assert_eq!(calls[0].started, calls[1].started);
}
