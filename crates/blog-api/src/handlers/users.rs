//! Per-author post listing

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::UserPostsResponse;
use blog_service::PostService;

use crate::extractors::PageQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Posts of one author, newest first
///
/// GET /user/:username
pub async fn user_posts(
    State(state): State<AppState>,
    Path(username): Path<String>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<UserPostsResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.list_by_author(&username, page).await?;
    Ok(Json(response))
}
