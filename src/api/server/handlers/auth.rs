use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::interface::DynAPI,
    auth::{AccessToken, User},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

pub async fn register(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<Credentials>,
) -> Result<Json<User>, Error> {
    let user = api.create_user(params.username, params.password).await?;

    Ok(user.into())
}

pub async fn login(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<Credentials>,
) -> Result<Json<AccessToken>, Error> {
    let token = api.login(params.username, params.password).await?;

    Ok(token.into())
}
