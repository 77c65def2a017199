//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs (page view contexts) for API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    LoginRequest, PostForm, RefreshTokenRequest, RegisterRequest, UpdateAccountRequest,
};

pub use responses::{
    AboutResponse, AuthResponse, ConfirmDeleteResponse, CurrentUserResponse, HealthChecks,
    HealthResponse, PageMeta, PageResponse, PostFormResponse, PostResponse, ProfileResponse,
    ReadinessResponse, UserPostsResponse, UserResponse,
};

pub use mappers::{page_with_authors, PostWithAuthor};
