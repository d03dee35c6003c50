pub mod products;
pub mod orders;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::now())
}

pub async fn index() -> &'static str {
    "Hello World! Shop is running!"
}

pub async fn shop() -> &'static str {
    "Welcome to the shop!"
}

/// Build the full application router: greetings, health, catalog and orders.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes (greetings + health + docs); none of these touch the database
    let public = Router::new()
        .route("/", get(index))
        .route("/shop", get(shop))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    let catalog = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::get))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id/status", put(orders::update_status));

    // Compose
    public
        .merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
