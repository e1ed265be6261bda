use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` when set and valid, otherwise the
/// configured directive, falling back to `info`.
pub fn filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global `fmt` subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(configured))
        .with_target(true)
        .try_init();
}
