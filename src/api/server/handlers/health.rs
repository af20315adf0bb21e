use axum::extract::{Extension, Json};

use crate::{api::interface::DynAPI, entities::HealthStatus};

pub async fn check(Extension(api): Extension<DynAPI>) -> Json<HealthStatus> {
    api.health().await.into()
}
