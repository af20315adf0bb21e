use async_trait::async_trait;
use axum::extract::{Extension, FromRequest, RequestParts};
use axum::http::header::AUTHORIZATION;

use crate::api::interface::DynAPI;
use crate::auth::{token, User};
use crate::error::{unauthorized_error, unexpected_error, Error};

pub struct AuthUser(pub User);

#[async_trait]
impl<B: Send> FromRequest<B> for AuthUser {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let Extension(api): Extension<DynAPI> = Extension::from_request(req)
            .await
            .map_err(|_| unexpected_error())?;

        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(unauthorized_error)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized_error)?;

        let user_id = token::verify(token)?;
        let user = api.find_user(user_id).await?;

        Ok(Self(user))
    }
}
