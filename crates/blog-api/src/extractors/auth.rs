//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header. A request
//! without credentials is sent to the login page; a request with bad
//! credentials is rejected.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejectionReason,
    TypedHeader,
};
use blog_common::AppError;
use blog_core::UserId;
use blog_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: UserId,
}

impl AuthUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if matches!(rejection.reason(), TypedHeaderRejectionReason::Missing) {
                        let next = parts
                            .uri
                            .path_and_query()
                            .map_or_else(|| parts.uri.path(), |pq| pq.as_str());
                        ApiError::login_required(app_state.login_url(), next)
                    } else {
                        tracing::warn!(error = %rejection, "Malformed authorization header");
                        ApiError::App(AppError::InvalidToken)
                    }
                })?;

        let user_id =
            AuthService::new(app_state.service_context()).authenticate(bearer.token())?;

        Ok(AuthUser::new(user_id))
    }
}
