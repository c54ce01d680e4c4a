use std::sync::Arc;
use std::time::Duration;

use gather::{
    GatherError, PARTIAL_FAILURE_MESSAGE, PostId, SUCCESS_MESSAGE, Stage, fetch_sequential,
};
use gather_mock::{FaultPlan, Forced};

use crate::helpers::{ProfileOnlySource, fail_comments_for, instant_source, timed_source, u1};

#[tokio::test]
async fn u1_all_success() {
    let src = instant_source(FaultPlan::new());
    let r = fetch_sequential(&*src, &u1()).await;

    let profile = r.profile.as_ref().expect("profile present");
    assert_eq!(profile.name, "User u1 Name");
    assert_eq!(profile.email, "useru1@example.com");
    assert_eq!(profile.username, "useru1");

    let ids: Vec<PostId> = r.posts.iter().map(|p| p.id()).collect();
    assert_eq!(ids, [PostId(1), PostId(2), PostId(3)]);
    assert_eq!(r.posts[0].post.title, "First post by u1");
    assert_eq!(r.posts[2].post.body, "Final post content in this small list.");
    for p in &r.posts {
        assert_eq!(p.comments().len(), 3);
        assert!(p.comments_error().is_none());
    }
    assert!(r.errors.is_empty());
    assert_eq!(r.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn only_post_two_fails() {
    let src = instant_source(fail_comments_for(&[2]));
    let r = fetch_sequential(&*src, &u1()).await;

    assert_eq!(r.posts.len(), 3);
    assert_eq!(r.posts[0].comments().len(), 3);
    assert_eq!(r.posts[1].comments_error(), Some("Failed to fetch comments"));
    assert!(r.posts[1].comments().is_empty());
    assert_eq!(r.posts[2].comments().len(), 3);

    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Comments(PostId(2)));
    assert_eq!(r.errors[0].message, "Failed to fetch comments");
    assert_eq!(r.message, PARTIAL_FAILURE_MESSAGE);
}

#[tokio::test]
async fn every_comment_fetch_fails() {
    let src = instant_source(FaultPlan::new().all_comments(Forced::Fail));
    let r = fetch_sequential(&*src, &u1()).await;

    let tags: Vec<String> = r.errors.iter().map(|e| e.stage.to_string()).collect();
    assert_eq!(tags, ["comments:1", "comments:2", "comments:3"]);
    assert!(r.posts.iter().all(|p| p.comments_error().is_some()));
    assert!(r.profile.is_some());
    assert_eq!(r.message, PARTIAL_FAILURE_MESSAGE);
}

#[tokio::test]
async fn posts_failure_skips_comments() {
    let src = instant_source(FaultPlan::new().posts(Forced::Fail));
    let r = fetch_sequential(&*src, &u1()).await;

    assert!(r.profile.is_some());
    assert!(r.posts.is_empty());
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Posts);
    assert_eq!(r.errors[0].message, "Failed to fetch posts");
}

#[tokio::test]
async fn profile_failure_keeps_posts() {
    let src = instant_source(FaultPlan::new().profile(Forced::Fail));
    let r = fetch_sequential(&*src, &u1()).await;

    assert!(r.profile.is_none());
    assert_eq!(r.posts.len(), 3);
    assert!(r.posts.iter().all(|p| p.comments().len() == 3));
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Profile);
}

#[tokio::test]
async fn missing_roles_are_stage_errors() {
    let src = Arc::new(ProfileOnlySource);
    let r = fetch_sequential(&*src, &u1()).await;

    assert!(r.profile.is_some());
    assert!(r.posts.is_empty());
    let posts_err = r.stage_error(Stage::Posts).expect("posts error");
    assert_eq!(posts_err.message, GatherError::unsupported("posts").to_string());
}

#[tokio::test(start_paused = true)]
async fn elapsed_recorded_when_every_stage_fails() {
    let src = timed_source(FaultPlan::new().profile(Forced::Fail).posts(Forced::Fail));
    let r = fetch_sequential(&*src, &u1()).await;

    assert!(r.profile.is_none());
    assert!(r.posts.is_empty());
    assert_eq!(r.errors.len(), 2);
    assert_eq!(r.errors[0].stage, Stage::Profile);
    assert_eq!(r.errors[1].stage, Stage::Posts);
    assert!(r.elapsed_ms >= 2500, "elapsed was {}", r.elapsed_ms);
    assert!(Duration::from_millis(r.elapsed_ms) < Duration::from_millis(2600));
}
