//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Profile, DEFAULT_PROFILE_IMAGE};
use blog_core::error::DomainError;
use blog_core::traits::{ProfileRepository, RepoResult};
use blog_core::value_objects::UserId;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, image, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: UserId) -> RepoResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (user_id, image)
            VALUES ($1, $2)
            RETURNING id, user_id, image, created_at, updated_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(DEFAULT_PROFILE_IMAGE)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::ProfileAlreadyExists(user_id)))?;

        Ok(Profile::from(model))
    }

    #[instrument(skip(self))]
    async fn save(&self, user_id: UserId, image: &str) -> RepoResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (user_id, image)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET image = EXCLUDED.image, updated_at = NOW()
            RETURNING id, user_id, image, created_at, updated_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Profile::from(model))
    }
}
