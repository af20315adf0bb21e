use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    auth::AuthUser,
    entities::Preference,
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct CreatePreferenceParams {
    prompt: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
    Json(params): Json<CreatePreferenceParams>,
) -> Result<Json<Preference>, Error> {
    let preference = api.create_preference(user, params.prompt).await?;

    Ok(preference.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Preference>>, Error> {
    let preferences = api.list_preferences(user).await?;

    Ok(preferences.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.delete_preference(user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
