//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use blog_core::PostId;

use crate::response::ApiError;

/// Post id from the `:id` path segment
///
/// A segment that is not a positive integer cannot name a post, so it is
/// rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct PostIdPath(pub PostId);

#[async_trait]
impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        let id = PostId::parse(&raw).map_err(|e| ApiError::invalid_path(format!("{raw}: {e}")))?;
        Ok(PostIdPath(id))
    }
}
