use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics go to stderr so they never mix with command output.
/// Verbosity comes from `RUST_LOG`, defaulting to warnings only.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
