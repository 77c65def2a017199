//! # blog-api
//!
//! HTTP server for the blog, built with the Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, jwt_service, run, run_server};
pub use state::AppState;
