//! Response DTOs for API endpoints
//!
//! Each response is the view context of one page; a template layer or client
//! renders it. Ids serialize as plain numbers.

use blog_core::value_objects::{PostId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Pagination
// ============================================================================

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

/// Page-number pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub number: u32,
    pub size: u32,
    pub total: u64,
    pub num_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_number: Option<u32>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user information
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub date_joined: DateTime<Utc>,
}

/// The signed-in user, including private fields
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

/// Account page: the user and their profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: CurrentUserResponse,
    pub image: String,
    pub image_url: String,
    pub updated_at: DateTime<Utc>,
}

/// Posts of one author
#[derive(Debug, Clone, Serialize)]
pub struct UserPostsResponse {
    pub author: UserResponse,
    pub posts: PageResponse<PostResponse>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// A post with its author's username
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: UserId,
    pub author: String,
    pub has_code: bool,
    pub code: String,
    pub url: String,
}

/// Values of the create/update form
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostFormResponse {
    /// Set when editing an existing post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub has_code: bool,
    pub code: String,
}

/// Delete confirmation page
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDeleteResponse {
    pub post: PostResponse,
}

// ============================================================================
// Static pages
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AboutResponse {
    pub title: &'static str,
}

impl AboutResponse {
    pub fn new() -> Self {
        Self { title: "About" }
    }
}

impl Default for AboutResponse {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status of each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
