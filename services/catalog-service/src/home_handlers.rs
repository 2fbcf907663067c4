use axum::{extract::State, http::Uri, response::Response, Json};

use crate::app_state::AppState;
use crate::catalog::Product;
use crate::view::{View, INDEX_TEMPLATE};
use crate::ApiError;

pub async fn health() -> &'static str {
    "ok"
}

/// Home page: every product, rendered through the index template.
pub async fn index(State(state): State<AppState>) -> View<Vec<Product>> {
    state.metrics.record_request("index");
    let products = state.catalog.list_products().to_vec();
    View::new(state.templates.clone(), INDEX_TEMPLATE, products)
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    state.metrics.record_request("list_products");
    Json(state.catalog.list_products().to_vec())
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.metrics.record_request("metrics");
    state.metrics.render().map_err(|e| ApiError::internal(e, None))
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "no route matched");
    ApiError::not_found("route_not_found")
}
