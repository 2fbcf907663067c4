use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) falls back to text.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") { LogFormat::Json } else { LogFormat::Text }
    }
}

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(service: &str, format: LogFormat) {
    let filter = env_filter("info");
    let installed = match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).try_init().is_ok(),
    };
    if installed {
        tracing::info!(service, ?format, "tracing initialized");
    }
}
