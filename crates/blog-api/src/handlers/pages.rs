//! Static pages and the catch-all

use axum::{http::Uri, Json};
use blog_service::dto::AboutResponse;

use crate::response::ApiError;

/// GET /about
pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse::new())
}

/// Any route that does not exist
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::invalid_path(uri.path().to_string())
}
