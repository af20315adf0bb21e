use axum::extract::{Extension, Json};

use crate::{
    api::interface::DynAPI,
    auth::AuthUser,
    entities::{RouteSearch, RouteSearchParams},
    error::Error,
};

pub async fn search(
    Extension(api): Extension<DynAPI>,
    AuthUser(user): AuthUser,
    Json(params): Json<RouteSearchParams>,
) -> Result<Json<RouteSearch>, Error> {
    let result = api.search_routes(user, params).await?;

    Ok(result.into())
}
