//! Store readiness probe

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::traits::{HealthCheck, RepoResult};

use super::error::map_db_error;

/// Pings PostgreSQL through the shared pool
#[derive(Clone)]
pub struct PgHealthCheck {
    pool: PgPool,
}

impl PgHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
