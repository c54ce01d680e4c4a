use gather::{
    FATAL_MESSAGE, Gatherer, PARTIAL_FAILURE_MESSAGE, PostId, Stage, UserProfile,
    fetch_with_error_handling,
};
use gather_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{fail_comments_for, instant_source, u1};

#[tokio::test]
async fn stage_errors_pass_through() {
    let g = Gatherer::builder()
        .with_source(instant_source(fail_comments_for(&[1])))
        .build()
        .expect("source set");
    let r = g.fetch_with_error_handling(&u1()).await;

    assert_eq!(r.message, PARTIAL_FAILURE_MESSAGE);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Comments(PostId(1)));
    assert!(r.profile.is_some());
}

#[tokio::test]
async fn panic_becomes_fatal_report() {
    let (src, ctl) = DynamicMockSource::new_with_controller("boom");
    ctl.set_profile_behavior(u1(), MockBehavior::<UserProfile>::Panic("source defect"))
        .await;
    ctl.set_posts_behavior(u1(), MockBehavior::Return(vec![])).await;

    let r = fetch_with_error_handling(&*src, &u1()).await;
    assert!(r.profile.is_none());
    assert!(r.posts.is_empty());
    assert_eq!(r.elapsed_ms, 0);
    assert_eq!(r.message, FATAL_MESSAGE);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0].stage, Stage::Fatal);
    assert_eq!(r.errors[0].message, "source defect");
}

#[tokio::test]
#[should_panic(expected = "source defect")]
async fn plain_aggregators_let_panics_escape() {
    let (src, ctl) = DynamicMockSource::new_with_controller("boom");
    ctl.set_profile_behavior(u1(), MockBehavior::<UserProfile>::Panic("source defect"))
        .await;
    let _ = gather::fetch_parallel(&*src, &u1()).await;
}
