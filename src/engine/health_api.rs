use super::Engine;

use async_trait::async_trait;
use sqlx::Executor;

use crate::api::interface::HealthAPI;
use crate::entities::{HealthStatus, ServiceHealth};

#[async_trait]
impl HealthAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn health(&self) -> HealthStatus {
        let database = match self.pool.acquire().await {
            Ok(mut conn) => match conn.execute(sqlx::query("SELECT 1")).await {
                Ok(_) => ServiceHealth::healthy("database is responding"),
                Err(e) => ServiceHealth::unhealthy(format!("database query failed: {}", e)),
            },
            Err(e) => ServiceHealth::unhealthy(format!("database connection failed: {}", e)),
        };

        let insight_api = self.insight.health_check().await;

        let status = if database.healthy && insight_api.healthy {
            "ok"
        } else {
            "degraded"
        };

        HealthStatus {
            status: status.into(),
            database,
            insight_api,
        }
    }
}
