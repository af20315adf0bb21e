use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub healthy: bool,
    pub message: String,
}

impl ServiceHealth {
    pub fn healthy(message: &str) -> Self {
        Self {
            healthy: true,
            message: message.into(),
        }
    }

    pub fn unhealthy(message: String) -> Self {
        Self {
            healthy: false,
            message,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: ServiceHealth,
    pub insight_api: ServiceHealth,
}
