//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, pages, posts, profile, users};
use crate::state::AppState;

/// Create the main router with all pages (health is kept apart so it can
/// bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(blog_routes())
        .merge(account_routes())
        .fallback(pages::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Posts, author listings and static pages
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_posts))
        .route("/about", get(pages::about))
        .route("/user/:username", get(users::user_posts))
        .route("/post/new", get(posts::new_post_form).post(posts::create_post))
        .route("/post/:id", get(posts::get_post))
        .route(
            "/post/:id/update",
            get(posts::edit_post_form).post(posts::update_post),
        )
        .route(
            "/post/:id/delete",
            get(posts::confirm_delete_post).post(posts::delete_post),
        )
}

/// Registration, tokens and the profile page
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/token/refresh", post(auth::refresh_token))
        .route(
            "/profile",
            get(profile::get_profile).post(profile::update_profile),
        )
}
