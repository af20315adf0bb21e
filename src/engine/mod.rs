mod health_api;
mod preference_api;
mod route_preference_api;
mod search_api;
mod user_api;

use sqlx::{Executor, Pool, Postgres};
use std::sync::Arc;

use crate::api::API;
use crate::error::Error;
use crate::external::{InsightProvider, RoutingProvider};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    routing: Arc<dyn RoutingProvider>,
    insight: Arc<dyn InsightProvider>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(
        pool: Pool<Database>,
        routing: Arc<dyn RoutingProvider>,
        insight: Arc<dyn InsightProvider>,
    ) -> Result<Self, Error> {
        // user service
        pool.execute(
            "CREATE TABLE IF NOT EXISTS users (id UUID PRIMARY KEY, username VARCHAR NOT NULL UNIQUE, hashed_password VARCHAR NOT NULL)",
        )
        .await?;

        // preference service
        pool.execute(
            "CREATE TABLE IF NOT EXISTS preferences (id UUID PRIMARY KEY, user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE, prompt TEXT NOT NULL)",
        )
        .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS route_preferences (id UUID PRIMARY KEY, user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE, prompt TEXT NOT NULL, from_latitude DOUBLE PRECISION NOT NULL, from_longitude DOUBLE PRECISION NOT NULL, to_latitude DOUBLE PRECISION NOT NULL, to_longitude DOUBLE PRECISION NOT NULL)",
        )
        .await?;

        Ok(Self {
            pool,
            routing,
            insight,
        })
    }
}

impl API for Engine {}
