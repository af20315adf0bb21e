use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    auth::AuthUser,
    entities::{Coordinates, RoutePreference},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct CreateRoutePreferenceParams {
    prompt: String,
    origin: Coordinates,
    destination: Coordinates,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
    Json(params): Json<CreateRoutePreferenceParams>,
) -> Result<Json<RoutePreference>, Error> {
    let preference = api
        .create_route_preference(user, params.prompt, params.origin, params.destination)
        .await?;

    Ok(preference.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<RoutePreference>>, Error> {
    let preferences = api.list_route_preferences(user).await?;

    Ok(preferences.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.delete_route_preference(user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
