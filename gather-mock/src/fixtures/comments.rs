use gather_core::{Comment, PostId};

const COMMENTS: [(u64, &str, &str); 3] = [
    (1, "commenter1", "Nice post!"),
    (2, "commenter2", "Thanks for sharing."),
    (3, "commenter3", "Great read."),
];

pub fn for_post(post: PostId) -> Vec<Comment> {
    COMMENTS
        .iter()
        .map(|&(id, username, text)| Comment {
            id,
            post_id: post,
            username: username.to_string(),
            text: text.to_string(),
        })
        .collect()
}
