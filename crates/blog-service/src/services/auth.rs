//! Authentication service
//!
//! Handles user registration, login, token refresh and access-token checks.

use blog_common::auth::{
    hash_password, validate_password_strength, verify_password, TokenPair, TokenType,
};
use blog_common::AppError;
use blog_core::entities::{NewUser, User};
use blog_core::error::DomainError;
use blog_core::value_objects::UserId;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::account::AccountService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        if let Err(e) = validate_password_strength(&request.password, &request.username) {
            let message = match e {
                AppError::Validation(message) => message,
                other => other.to_string(),
            };
            return Err(ServiceError::field("password", "password_policy", message));
        }

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser::new(request.username, request.email);
        let (user, _profile) = AccountService::new(self.ctx)
            .create_user(&new_user, &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_tokens(&user)
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let user_id = self
            .ctx
            .jwt_service()
            .verify(&request.refresh_token, TokenType::Refresh)?;

        // The account may have been removed since the token was issued
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.issue_tokens(&user)
    }

    /// User behind a bearer access token
    pub fn authenticate(&self, token: &str) -> ServiceResult<UserId> {
        let user_id = self
            .ctx
            .jwt_service()
            .verify(token, TokenType::Access)
            .map_err(|e| {
                warn!(error = %e, "Rejected access token");
                e
            })?;
        Ok(user_id)
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let TokenPair {
            access_token,
            refresh_token,
            token_type,
            expires_in,
        } = self
            .ctx
            .jwt_service()
            .issue(user.id)?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            token_type,
            expires_in,
            user: CurrentUserResponse::from(user),
        })
    }
}
