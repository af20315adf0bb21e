mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::server::handlers::{auth, health, preferences, route_preferences, routes};
use crate::api::{interface::DynAPI, API};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health::check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/routes/search", post(routes::search))
        .route(
            "/preferences",
            get(preferences::list).post(preferences::create),
        )
        .route("/preferences/:id", delete(preferences::remove))
        .route(
            "/route-preferences",
            get(route_preferences::list).post(route_preferences::create),
        )
        .route("/route-preferences/:id", delete(route_preferences::remove))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "message": "Welcome to the Commute API" }))
}
