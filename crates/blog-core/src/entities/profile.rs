//! Profile entity - the one-to-one companion record of a user

use chrono::{DateTime, Utc};

use crate::value_objects::{ProfileId, UserId};

/// Image shown until the user picks one
pub const DEFAULT_PROFILE_IMAGE: &str = "default.jpg";

/// Profile entity
///
/// Exactly one profile exists per user. It is provisioned when the user is
/// created and removed only together with the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Public path of the profile image
    pub fn image_url(&self) -> String {
        format!("/media/{}", self.image)
    }

    /// Check if the user still has the placeholder image
    #[inline]
    pub fn has_default_image(&self) -> bool {
        self.image == DEFAULT_PROFILE_IMAGE
    }

    /// Replace the profile image
    pub fn set_image(&mut self, image: String) {
        self.image = image;
        self.updated_at = Utc::now();
    }
}
