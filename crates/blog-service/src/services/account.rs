//! Account service
//!
//! Owns the user/profile pair: creating a user provisions its profile, and
//! saving a user saves its profile.

use blog_core::entities::{NewUser, Profile, User, DEFAULT_PROFILE_IMAGE};
use blog_core::error::DomainError;
use blog_core::value_objects::UserId;
use tracing::{debug, error, info, instrument};
use validator::Validate;

use crate::dto::{ProfileResponse, UpdateAccountRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Insert a user and provision its profile
    ///
    /// If the profile cannot be created the user is removed again and the
    /// provisioning error is returned.
    #[instrument(skip(self, new_user, password_hash), fields(username = %new_user.username))]
    pub async fn create_user(
        &self,
        new_user: &NewUser,
        password_hash: &str,
    ) -> ServiceResult<(User, Profile)> {
        let user = self.ctx.user_repo().create(new_user, password_hash).await?;

        match self.ctx.profile_repo().create(user.id).await {
            Ok(profile) => {
                debug!(user_id = %user.id, profile_id = %profile.id, "Profile provisioned");
                Ok((user, profile))
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "Profile provisioning failed, removing user");
                if let Err(cleanup) = self.ctx.user_repo().delete(user.id).await {
                    error!(user_id = %user.id, error = %cleanup, "Failed to remove user after provisioning failure");
                }
                Err(e.into())
            }
        }
    }

    /// Write a user back and save its profile
    ///
    /// `image` replaces the profile picture when given; otherwise the current
    /// one is kept. A missing profile is recreated.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn save_user(&self, user: &User, image: Option<&str>) -> ServiceResult<Profile> {
        self.ctx.user_repo().update(user).await?;

        let image = match image {
            Some(image) => image.to_string(),
            None => self
                .ctx
                .profile_repo()
                .find_by_user(user.id)
                .await?
                .map_or_else(|| DEFAULT_PROFILE_IMAGE.to_string(), |p| p.image),
        };

        let profile = self.ctx.profile_repo().save(user.id, &image).await?;
        Ok(profile)
    }

    /// The signed-in user and their profile
    #[instrument(skip(self))]
    pub async fn profile(&self, actor: UserId) -> ServiceResult<ProfileResponse> {
        let user = self.load_user(actor).await?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(actor)
            .await?
            .ok_or(DomainError::ProfileNotFound(actor))?;

        Ok(ProfileResponse::from((&user, profile)))
    }

    /// Update username, email and profile picture
    #[instrument(skip(self, request))]
    pub async fn update_account(
        &self,
        actor: UserId,
        request: UpdateAccountRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let mut user = self.load_user(actor).await?;

        if let Some(username) = request.username {
            if username != user.username {
                if self.ctx.user_repo().username_exists(&username).await? {
                    return Err(DomainError::UsernameAlreadyExists.into());
                }
                user.set_username(username);
            }
        }

        if let Some(email) = request.email {
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(DomainError::EmailAlreadyExists.into());
                }
                user.set_email(email);
            }
        }

        let profile = self.save_user(&user, request.image.as_deref()).await?;

        info!(user_id = %actor, "Account updated");
        Ok(ProfileResponse::from((&user, profile)))
    }

    async fn load_user(&self, id: UserId) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;
        Ok(user)
    }
}
