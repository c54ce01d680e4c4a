use gather_core::{UserId, UserProfile};

pub fn for_user(user: &UserId) -> UserProfile {
    UserProfile {
        id: user.clone(),
        name: format!("User {user} Name"),
        email: format!("user{user}@example.com"),
        username: format!("user{user}"),
    }
}
