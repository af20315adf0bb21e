use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{Executor, Row};
use uuid::Uuid;

use crate::api::interface::RoutePreferenceAPI;
use crate::auth::User;
use crate::entities::{Coordinates, RoutePreference};
use crate::error::{
    forbidden_error, invalid_input_error, not_found_error, unexpected_error, Error,
};

#[async_trait]
impl RoutePreferenceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_route_preference(
        &self,
        user: User,
        prompt: String,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePreference, Error> {
        let prompt = prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(invalid_input_error());
        }

        let preference = RoutePreference::new(user.id, prompt, origin, destination);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO route_preferences (id, user_id, prompt, from_latitude, from_longitude, to_latitude, to_longitude) VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&preference.id)
            .bind(&preference.user_id)
            .bind(&preference.prompt)
            .bind(preference.origin.latitude)
            .bind(preference.origin.longitude)
            .bind(preference.destination.latitude)
            .bind(preference.destination.longitude),
        )
        .await?;

        Ok(preference)
    }

    #[tracing::instrument(skip(self))]
    async fn list_route_preferences(&self, user: User) -> Result<Vec<RoutePreference>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut rows = conn.fetch(
            sqlx::query(
                "SELECT id, user_id, prompt, from_latitude, from_longitude, to_latitude, to_longitude FROM route_preferences WHERE user_id = $1",
            )
            .bind(&user.id),
        );

        let mut preferences = Vec::new();
        while let Some(row) = rows.try_next().await? {
            // rows are written through the validated constructor, so a
            // range failure here means the data is corrupt
            let origin = Coordinates::new(row.try_get("from_latitude")?, row.try_get("from_longitude")?)
                .map_err(|_| unexpected_error())?;
            let destination = Coordinates::new(row.try_get("to_latitude")?, row.try_get("to_longitude")?)
                .map_err(|_| unexpected_error())?;

            preferences.push(RoutePreference {
                id: row.try_get("id")?,
                user_id: row.try_get("user_id")?,
                prompt: row.try_get("prompt")?,
                origin,
                destination,
            });
        }

        Ok(preferences)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_route_preference(&self, user: User, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(
                sqlx::query("SELECT user_id FROM route_preferences WHERE id = $1").bind(&id),
            )
            .await?;

        let row = maybe_row.ok_or_else(not_found_error)?;
        let owner_id: Uuid = row.try_get("user_id")?;

        if owner_id != user.id {
            return Err(forbidden_error());
        }

        conn.execute(sqlx::query("DELETE FROM route_preferences WHERE id = $1").bind(&id))
            .await?;

        Ok(())
    }
}
