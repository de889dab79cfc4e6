use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    state::AppState,
};

pub mod actions;
pub mod products;
pub mod recommendations;
pub mod users;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/actions", post(actions::record_action))
        .route("/recommendations/:user_id", get(recommendations::recommend))
        .route("/users/:user_id/weights", get(users::get_weights))
        .route("/products", get(products::list_products))
        .route("/products/:product_id", get(products::get_product))
}

/// CORS policy admitting the storefront backend's origin
pub fn cors_layer(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin {}: {}", allowed_origin, e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "Recommendation API",
            "version": env!("CARGO_PKG_VERSION"),
            "store": state.tracker.store_name(),
            "catalog_size": state.catalog.len(),
            "endpoints": {
                "record_action": "POST /api/v1/actions",
                "get_recommendations": "GET /api/v1/recommendations/{user_id}",
                "get_user_weights": "GET /api/v1/users/{user_id}/weights",
                "list_products": "GET /api/v1/products",
                "get_product": "GET /api/v1/products/{product_id}",
            },
            "checked_at": Utc::now().to_rfc3339(),
        })),
    )
}
