//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one
//! request and orchestrates repository calls for a single use case.

pub mod account;
pub mod auth;
pub mod context;
pub mod error;
pub mod health;
pub mod post;

// Re-export all services for convenience
pub use account::AccountService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use post::PostService;
