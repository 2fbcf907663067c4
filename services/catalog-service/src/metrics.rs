use anyhow::Result;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::app_state::AppState;

const SERVICE: &str = "catalog-service";

#[derive(Clone)]
pub struct CatalogMetrics {
    registry: Registry,
    requests: IntCounterVec,
    http_errors: IntCounterVec,
    products: IntGauge,
}

impl CatalogMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("catalog_requests_total", "Requests served grouped by route"),
            &["route"],
        )?;
        registry.register(Box::new(requests.clone()))?;

        let http_errors = IntCounterVec::new(
            Opts::new("http_errors_total", "Count of HTTP error responses emitted (status >= 400)"),
            &["service", "code", "status"],
        )?;
        registry.register(Box::new(http_errors.clone()))?;

        let products = IntGauge::new("catalog_products", "Products currently in the catalog")?;
        registry.register(Box::new(products.clone()))?;

        Ok(Self { registry, requests, http_errors, products })
    }

    pub fn record_request(&self, route: &str) {
        self.requests.with_label_values(&[route]).inc();
    }

    pub fn set_product_count(&self, count: usize) {
        self.products.set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn record_error(&self, code: &str, status: StatusCode) {
        self.http_errors.with_label_values(&[SERVICE, code, status.as_str()]).inc();
    }

    pub fn render(&self) -> Result<Response> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        let response = Response::builder()
            .status(StatusCode::OK)
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; version=0.0.4"),
            )
            .body(Body::from(buffer))?;
        Ok(response)
    }
}

/// Counts error responses by the `X-Error-Code` header that `ApiError` sets.
pub async fn http_error_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    let status = resp.status();
    if status.as_u16() >= 400 {
        let code = resp.headers().get("X-Error-Code").and_then(|v| v.to_str().ok()).unwrap_or("unknown");
        state.metrics().record_error(code, status);
    }
    resp
}
