use gather_core::{Post, PostId, UserId};

const POSTS: [(u64, &str, &str); 3] = [
    (1, "First", "This is the first post content."),
    (2, "Second", "Some more content for post two."),
    (3, "Third", "Final post content in this small list."),
];

pub fn for_user(user: &UserId) -> Vec<Post> {
    POSTS
        .iter()
        .map(|&(id, ordinal, body)| Post {
            id: PostId(id),
            user_id: user.clone(),
            title: format!("{ordinal} post by {user}"),
            body: body.to_string(),
        })
        .collect()
}
