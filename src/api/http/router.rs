// src/api/http/router.rs
// HTTP router composition for the catalog endpoints

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers::{
    create_item_handler, get_item_handler, health_handler, hello_handler, openapi_handler,
    root_handler, status_handler,
};
use crate::state::AppState;

/// Path prefix shared by every catalog endpoint
pub const API_PREFIX: &str = "/papi";

fn api_path(suffix: &str) -> String {
    format!("{}{}", API_PREFIX, suffix)
}

/// Catalog routes, all under `/papi`
pub fn http_router() -> Router<AppState> {
    Router::new()
        // Info
        .route(API_PREFIX, get(root_handler))
        .route(&api_path("/hello"), get(hello_handler))
        .route(&api_path("/status"), get(status_handler))
        .route(&api_path("/openapi.json"), get(openapi_handler))

        // Items
        .route(&api_path("/items/{item_id}"), get(get_item_handler))
        .route(&api_path("/items/"), post(create_item_handler))
        // Same handler without the trailing slash
        .route(&api_path("/items"), post(create_item_handler))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origin == "*" {
        return cors.allow_origin(Any);
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(value),
        Err(_) => {
            warn!("Invalid CORS origin '{}', allowing any origin", origin);
            cors.allow_origin(Any)
        }
    }
}

/// Full application: catalog routes, root health check, CORS and request tracing
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(http_router())
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
