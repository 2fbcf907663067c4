use axum::http::{header::{ACCEPT, CONTENT_TYPE}, HeaderValue, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::app_state::AppState;
use crate::home_handlers::{health, index, list_products, metrics, not_found};
use crate::metrics::http_error_metrics;

/// `*` anywhere in the list opens CORS to every origin; `AllowOrigin::list` rejects it.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        )
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    Router::new()
        .route("/", get(index))
        .route("/api/products", get(list_products))
        .route("/healthz", get(health))
        .route("/internal/metrics", get(metrics))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), http_error_metrics))
        .layer(cors)
        .with_state(state)
}
