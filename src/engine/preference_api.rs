use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{Executor, Row};
use uuid::Uuid;

use crate::api::interface::PreferenceAPI;
use crate::auth::User;
use crate::entities::Preference;
use crate::error::{forbidden_error, invalid_input_error, not_found_error, Error};

#[async_trait]
impl PreferenceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_preference(&self, user: User, prompt: String) -> Result<Preference, Error> {
        let prompt = prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(invalid_input_error());
        }

        let preference = Preference::new(user.id, prompt);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO preferences (id, user_id, prompt) VALUES ($1, $2, $3)")
                .bind(&preference.id)
                .bind(&preference.user_id)
                .bind(&preference.prompt),
        )
        .await?;

        Ok(preference)
    }

    #[tracing::instrument(skip(self))]
    async fn list_preferences(&self, user: User) -> Result<Vec<Preference>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query("SELECT id, user_id, prompt FROM preferences WHERE user_id = $1")
                .bind(&user.id),
        );

        let mut preferences = Vec::new();
        while let Some(row) = rows.try_next().await? {
            preferences.push(Preference {
                id: row.try_get("id")?,
                user_id: row.try_get("user_id")?,
                prompt: row.try_get("prompt")?,
            });
        }

        Ok(preferences)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_preference(&self, user: User, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(sqlx::query("SELECT user_id FROM preferences WHERE id = $1").bind(&id))
            .await?;

        let row = maybe_row.ok_or_else(not_found_error)?;
        let owner_id: Uuid = row.try_get("user_id")?;

        if owner_id != user.id {
            return Err(forbidden_error());
        }

        conn.execute(sqlx::query("DELETE FROM preferences WHERE id = $1").bind(&id))
            .await?;

        Ok(())
    }
}
