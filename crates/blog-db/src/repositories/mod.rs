//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod health;
mod post;
mod profile;
mod user;

pub use health::PgHealthCheck;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use user::PgUserRepository;
