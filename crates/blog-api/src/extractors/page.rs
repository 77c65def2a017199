//! Page number extractor
//!
//! Reads `?page=` from the query string: a positive number or `last`, and
//! page 1 when absent. Anything else names no page and is a 404.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::PageNumber;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters of a listing
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Requested listing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery(pub PageNumber);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let page = match params.page.as_deref() {
            None | Some("") => PageNumber::First,
            Some(raw) => raw.parse()?,
        };

        Ok(PageQuery(page))
    }
}
