pub mod app;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod home_handlers;
pub mod logger;
pub mod metrics;
pub mod view;

pub use app_state::AppState;
pub use catalog::{CatalogError, Product, ProductCatalogService};
pub use common_http_errors::ApiError;
pub use logger::{CatalogLogger, NoopLogger, TracingLogger};
