//! Axum extractors for request handling
//!
//! Custom extractors for authentication, request bodies, page numbers and
//! post identifiers.

mod auth;
mod page;
mod path;
mod validated;

pub use auth::AuthUser;
pub use page::{PageParams, PageQuery};
pub use path::PostIdPath;
pub use validated::{JsonBody, ValidatedJson};
