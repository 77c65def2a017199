//! Health service

use tracing::warn;

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The process is up
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// The backing store answers
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self.ctx.health().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        };

        ReadinessResponse::ready(database_healthy)
    }
}
