use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use common_money::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use uuid::Uuid;

use crate::logger::CatalogLogger;

pub const KAYAK_ID: Uuid = Uuid::from_u128(1);
pub const LIFEJACKET_ID: Uuid = Uuid::from_u128(2);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog seed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0} in catalog seed")]
    DuplicateId(Uuid),
}

/// A sellable item. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    id: Uuid,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(id: Uuid, name: impl Into<String>, price: Money) -> Self {
        Self { id, name: name.into(), price }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }
}

/// Catalog served when no seed file is configured.
pub fn reference_products() -> Vec<Product> {
    vec![
        Product::new(KAYAK_ID, "Kayak", Money::from_cents(27_500)),
        Product::new(LIFEJACKET_ID, "Lifejacket", Money::from_cents(4_895)),
    ]
}

/// Read-only, in-memory product listing.
pub struct ProductCatalogService {
    products: Vec<Product>,
    logger: Arc<dyn CatalogLogger>,
}

impl fmt::Debug for ProductCatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCatalogService")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}

impl ProductCatalogService {
    pub fn new(logger: Arc<dyn CatalogLogger>) -> Self {
        Self::with_products(reference_products(), logger)
    }

    pub fn with_products(products: Vec<Product>, logger: Arc<dyn CatalogLogger>) -> Self {
        Self { products, logger }
    }

    /// Load a JSON array of `{id, name, price}` records from disk.
    pub fn from_seed_file(
        path: impl AsRef<Path>,
        logger: Arc<dyn CatalogLogger>,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let service = Self::from_seed_json(&raw, logger)?;
        service.logger.log(
            Level::INFO,
            &format!("loaded {} products from {}", service.len(), path.display()),
        );
        Ok(service)
    }

    pub fn from_seed_json(raw: &str, logger: Arc<dyn CatalogLogger>) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                logger.log(Level::WARN, &format!("rejecting seed with duplicate id {}", product.id));
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self::with_products(products, logger))
    }

    /// Every known product, in catalog order. Pure read; never touches the logger.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NoopLogger;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<(Level, String)>>,
    }

    impl CatalogLogger for RecordingLogger {
        fn log(&self, level: Level, message: &str) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }

    fn noop() -> Arc<dyn CatalogLogger> {
        Arc::new(NoopLogger)
    }

    #[test]
    fn reference_catalog_has_two_products() {
        let svc = ProductCatalogService::new(noop());
        let products = svc.list_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name(), "Kayak");
        assert_eq!(products[0].price().to_string(), "275.00");
        assert_eq!(products[1].name(), "Lifejacket");
        assert_eq!(products[1].price().to_string(), "48.95");
        assert!(!svc.is_empty());
    }

    #[test]
    fn listing_is_idempotent() {
        let svc = ProductCatalogService::new(noop());
        let first = svc.list_products().to_vec();
        let second = svc.list_products().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn listing_does_not_log() {
        let logger = Arc::new(RecordingLogger::default());
        let svc = ProductCatalogService::new(logger.clone());
        let _ = svc.list_products();
        let _ = svc.list_products();
        assert!(logger.entries.lock().unwrap().is_empty());
    }

    #[test]
    fn seed_file_loads_and_logs_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"00000000-0000-0000-0000-00000000000a","name":"Paddle","price":"19.5"}},
               {{"id":"00000000-0000-0000-0000-00000000000b","name":"Canoe","price":"520"}},
               {{"id":"00000000-0000-0000-0000-00000000000c","name":"Map","price":"3.999"}}]"#
        )
        .unwrap();
        let logger = Arc::new(RecordingLogger::default());
        let svc = ProductCatalogService::from_seed_file(file.path(), logger.clone()).unwrap();
        assert_eq!(svc.len(), 3);
        assert_eq!(svc.list_products()[0].price().to_string(), "19.50");
        assert_eq!(svc.list_products()[2].price().to_string(), "3.99");
        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Level::INFO);
        assert!(entries[0].1.starts_with("loaded 3 products"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let raw = r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"A","price":"1"},
                      {"id":"00000000-0000-0000-0000-000000000001","name":"B","price":"2"}]"#;
        let err = ProductCatalogService::from_seed_json(raw, noop()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == KAYAK_ID));
    }

    #[test]
    fn negative_price_is_parse_error() {
        let raw = r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"A","price":"-1"}]"#;
        let err = ProductCatalogService::from_seed_json(raw, noop()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn unknown_seed_field_is_parse_error() {
        let raw = r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"A","price":"1","prise":"2"}]"#;
        let err = ProductCatalogService::from_seed_json(raw, noop()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().contains("prise"));
    }

    #[test]
    fn missing_seed_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = ProductCatalogService::from_seed_file(&missing, noop()).unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_seed_yields_empty_listing() {
        let svc = ProductCatalogService::from_seed_json("[]", noop()).unwrap();
        assert!(svc.is_empty());
        assert!(svc.list_products().is_empty());
    }
}
