//! Profile entity <-> model mapper

use blog_core::entities::Profile;
use blog_core::value_objects::{ProfileId, UserId};

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: ProfileId::new(model.id),
            user_id: UserId::new(model.user_id),
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
