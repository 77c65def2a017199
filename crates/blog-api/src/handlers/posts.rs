//! Post handlers
//!
//! Listing and detail are public. Writing needs a signed-in user, and
//! changing or removing a post needs its author.

use axum::{extract::State, Json};
use blog_service::dto::{
    ConfirmDeleteResponse, PageResponse, PostForm, PostFormResponse, PostResponse,
};
use blog_service::PostService;

use crate::extractors::{AuthUser, JsonBody, PageQuery, PostIdPath};
use crate::response::{ApiError, ApiResult, SeeOther};
use crate::state::AppState;

/// Home page: every post, newest first
///
/// GET /
pub async fn list_posts(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// GET /post/:id
pub async fn get_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.detail(post_id).await?;
    Ok(Json(response))
}

/// Empty form for a new post
///
/// GET /post/new
pub async fn new_post_form(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<PostFormResponse> {
    let service = PostService::new(state.service_context());
    Json(service.new_form())
}

/// Publish a post as the signed-in user
///
/// POST /post/new
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(form): JsonBody<PostForm>,
) -> ApiResult<SeeOther<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.create(auth.user_id, form).await?;
    Ok(SeeOther::with_body(post.url.clone(), post))
}

/// Pre-filled form for the post's author
///
/// GET /post/:id/update
pub async fn edit_post_form(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<PostFormResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.edit_form(auth.user_id, post_id).await?;
    Ok(Json(response))
}

/// Apply an edit from the post's author
///
/// An unreadable body is reported only after authorship is checked.
///
/// POST /post/:id/update
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
    body: Result<JsonBody<PostForm>, ApiError>,
) -> ApiResult<SeeOther<PostResponse>> {
    let service = PostService::new(state.service_context());
    let submitted = body.map(|JsonBody(form)| form);
    let post = service
        .update_submitted(auth.user_id, post_id, submitted)
        .await?;
    Ok(SeeOther::with_body(post.url.clone(), post))
}

/// Delete confirmation for the post's author
///
/// GET /post/:id/delete
pub async fn confirm_delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<ConfirmDeleteResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.confirm_delete(auth.user_id, post_id).await?;
    Ok(Json(response))
}

/// POST /post/:id/delete
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<SeeOther> {
    let service = PostService::new(state.service_context());
    service.delete(auth.user_id, post_id).await?;
    Ok(SeeOther::to("/"))
}
