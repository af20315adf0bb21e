use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};
use uuid::Uuid;

use crate::api::interface::UserAPI;
use crate::auth::{password, token, AccessToken, User};
use crate::error::{invalid_input_error, not_found_error, unauthorized_error, Error};

#[async_trait]
impl UserAPI for Engine {
    #[tracing::instrument(skip(self, password))]
    async fn create_user(&self, username: String, password: String) -> Result<User, Error> {
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            return Err(invalid_input_error());
        }

        let mut conn = self.pool.acquire().await?;

        // weak check so a duplicate surfaces as invalid input rather
        // than a constraint violation
        let existing = conn
            .fetch_optional(sqlx::query("SELECT id FROM users WHERE username = $1").bind(&username))
            .await?;

        if existing.is_some() {
            return Err(invalid_input_error());
        }

        let hashed = password::hash(&password)?;
        let user = User::new(username);

        conn.execute(
            sqlx::query("INSERT INTO users (id, username, hashed_password) VALUES ($1, $2, $3)")
                .bind(&user.id)
                .bind(&user.username)
                .bind(&hashed),
        )
        .await?;

        Ok(user)
    }

    #[tracing::instrument(skip(self, password))]
    async fn login(&self, username: String, password: String) -> Result<AccessToken, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(
                sqlx::query("SELECT id, hashed_password FROM users WHERE username = $1")
                    .bind(&username),
            )
            .await?;

        let row = maybe_row.ok_or_else(unauthorized_error)?;
        let id: Uuid = row.try_get("id")?;
        let hashed: String = row.try_get("hashed_password")?;

        if !password::verify(&password, &hashed)? {
            return Err(unauthorized_error());
        }

        Ok(AccessToken::bearer(token::issue(id)?))
    }

    #[tracing::instrument(skip(self))]
    async fn find_user(&self, id: Uuid) -> Result<User, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(sqlx::query("SELECT id, username FROM users WHERE id = $1").bind(&id))
            .await?;

        let row = maybe_row.ok_or_else(not_found_error)?;

        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
        })
    }
}
