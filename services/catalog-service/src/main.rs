use std::sync::Arc;

use anyhow::Context;
use catalog_service::app::build_router;
use catalog_service::config::CatalogConfig;
use catalog_service::{AppState, CatalogLogger, ProductCatalogService, TracingLogger};
use common_observability::init_tracing;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::from_env()?;
    init_tracing("catalog-service", config.log_format);

    let logger: Arc<dyn CatalogLogger> = Arc::new(TracingLogger::new("product_catalog"));
    let catalog = match &config.seed_path {
        Some(path) => ProductCatalogService::from_seed_file(path, logger)
            .with_context(|| format!("failed to load catalog seed {}", path.display()))?,
        None => ProductCatalogService::new(logger),
    };
    info!(products = catalog.len(), "catalog ready");

    let state = AppState::from_catalog(catalog)?;
    let app = build_router(state, &config.cors_allowed_origins);

    let addr = config.socket_addr();
    info!(%addr, "starting catalog-service");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
