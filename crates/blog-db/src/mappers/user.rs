//! User entity <-> model mapper

use blog_core::entities::User;
use blog_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values written by a user update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub username: &'a str,
    pub email: &'a str,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
        }
    }
}
