//! Profile handlers

use axum::{extract::State, Json};
use blog_service::dto::{ProfileResponse, UpdateAccountRequest};
use blog_service::AccountService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, SeeOther};
use crate::state::AppState;

/// The signed-in user's account and profile
///
/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update username, email or picture, then show the profile again
///
/// POST /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> ApiResult<SeeOther<ProfileResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_account(auth.user_id, request).await?;
    Ok(SeeOther::with_body("/profile", response))
}
