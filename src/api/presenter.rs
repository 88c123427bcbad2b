//! Maps stored users to their response shape.

use crate::api::dto::user::UserResponse;
use crate::domain::entities::User;

pub fn present_user(user: User) -> UserResponse {
    let is_of_age = user.is_of_age();

    UserResponse {
        id: user.id,
        name: user.name,
        age: user.age,
        is_of_age,
    }
}

/// Element-wise [`present_user`], preserving order.
pub fn present_users(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(present_user).collect()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        present_user(user)
    }
}
