use tracing::Level;

/// Logging capability handed to components at construction so tests can swap in
/// a recording or silent implementation.
pub trait CatalogLogger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards to `tracing`, tagging every event with the owning component.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl CatalogLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        let component = self.component;
        match level {
            Level::ERROR => tracing::error!(component, "{message}"),
            Level::WARN => tracing::warn!(component, "{message}"),
            Level::INFO => tracing::info!(component, "{message}"),
            Level::DEBUG => tracing::debug!(component, "{message}"),
            _ => tracing::trace!(component, "{message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl CatalogLogger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}
}
