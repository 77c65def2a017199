//! Domain entities - core business objects

mod post;
mod profile;
mod user;

pub use post::{NewPost, Post, PostChanges, TITLE_MAX_LEN};
pub use profile::{Profile, DEFAULT_PROFILE_IMAGE};
pub use user::{NewUser, User, USERNAME_MAX_LEN};
