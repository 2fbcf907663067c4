use std::sync::Arc;

use anyhow::Context;
use tera::Tera;

use crate::catalog::ProductCatalogService;
use crate::metrics::CatalogMetrics;
use crate::view::init_templates;

/// Shared application state used by handlers.
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<ProductCatalogService>,
    pub(crate) templates: Arc<Tera>,
    pub(crate) metrics: Arc<CatalogMetrics>,
}

impl AppState {
    pub fn new(catalog: Arc<ProductCatalogService>, templates: Arc<Tera>, metrics: Arc<CatalogMetrics>) -> Self {
        metrics.set_product_count(catalog.len());
        Self { catalog, templates, metrics }
    }

    /// Wire a catalog up with the embedded templates and a fresh metrics registry.
    pub fn from_catalog(catalog: ProductCatalogService) -> anyhow::Result<Self> {
        let templates = init_templates().context("failed to load view templates")?;
        let metrics = CatalogMetrics::new().context("failed to register metrics")?;
        Ok(Self::new(Arc::new(catalog), Arc::new(templates), Arc::new(metrics)))
    }

    pub fn metrics(&self) -> &CatalogMetrics { &self.metrics }
}
