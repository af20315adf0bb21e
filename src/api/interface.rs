use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AccessToken, User};
use crate::entities::{
    Coordinates, HealthStatus, Preference, RoutePreference, RouteSearch, RouteSearchParams,
};
use crate::error::Error;

#[async_trait]
pub trait UserAPI {
    async fn create_user(&self, username: String, password: String) -> Result<User, Error>;
    async fn login(&self, username: String, password: String) -> Result<AccessToken, Error>;
    async fn find_user(&self, id: Uuid) -> Result<User, Error>;
}

#[async_trait]
pub trait PreferenceAPI {
    async fn create_preference(&self, user: User, prompt: String) -> Result<Preference, Error>;
    async fn list_preferences(&self, user: User) -> Result<Vec<Preference>, Error>;
    async fn delete_preference(&self, user: User, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait RoutePreferenceAPI {
    async fn create_route_preference(
        &self,
        user: User,
        prompt: String,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoutePreference, Error>;

    async fn list_route_preferences(&self, user: User) -> Result<Vec<RoutePreference>, Error>;

    async fn delete_route_preference(&self, user: User, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait RouteSearchAPI {
    async fn search_routes(&self, user: User, params: RouteSearchParams)
        -> Result<RouteSearch, Error>;
}

#[async_trait]
pub trait HealthAPI {
    async fn health(&self) -> HealthStatus;
}

pub trait API: UserAPI + PreferenceAPI + RoutePreferenceAPI + RouteSearchAPI + HealthAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
