use std::time::Duration;

use gather::{Comment, Post, PostId, SUCCESS_MESSAGE, UserProfile, fetch_sequential};
use gather_mock::{DynamicMockSource, MockBehavior, Operation};

use crate::helpers::u1;

fn post(id: u64) -> Post {
    Post {
        id: PostId(id),
        user_id: u1(),
        title: format!("post {id}"),
        body: String::new(),
    }
}

fn comment(post: u64) -> Comment {
    Comment {
        id: 1,
        post_id: PostId(post),
        username: "commenter1".into(),
        text: "Nice post!".into(),
    }
}

fn slow<T>(ms: u64, value: T) -> MockBehavior<T> {
    MockBehavior::delayed(Duration::from_millis(ms), MockBehavior::Return(value))
}

#[tokio::test(start_paused = true)]
async fn one_call_in_flight_at_a_time() {
    let (src, ctl) = DynamicMockSource::new_with_controller("seq");
    ctl.set_profile_behavior(
        u1(),
        slow(
            100,
            UserProfile {
                id: u1(),
                name: "User u1 Name".into(),
                email: "useru1@example.com".into(),
                username: "useru1".into(),
            },
        ),
    )
    .await;
    ctl.set_posts_behavior(u1(), slow(100, vec![post(1), post(2), post(3)]))
        .await;
    for id in 1..=3 {
        ctl.set_comments_behavior(PostId(id), slow(100, vec![comment(id)]))
            .await;
    }

    let r = fetch_sequential(&*src, &u1()).await;
    assert_eq!(r.message, SUCCESS_MESSAGE);

    let calls = ctl.calls().await;
    let ops: Vec<Operation> = calls.iter().map(|c| c.op).collect();
    assert_eq!(
        ops,
        [
            Operation::Profile,
            Operation::Posts,
            Operation::Comments(PostId(1)),
            Operation::Comments(PostId(2)),
            Operation::Comments(PostId(3)),
        ]
    );
    // every call starts only after the previous one settled
    for pair in calls.windows(2) {
        assert!(pair[1].started - pair[0].started >= Duration::from_millis(100));
    }
    assert!(r.elapsed_ms >= 500);
}
