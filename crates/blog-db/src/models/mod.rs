//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod profile;
mod user;

pub use post::PostModel;
pub use profile::ProfileModel;
pub use user::UserModel;
