use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Logs go to stderr; stdout carries the report.
pub fn init() {
    // RUST_LOG=info,debug,...  (defaults to warn)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
