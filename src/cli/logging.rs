use super::LogLevel;
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr. stdout carries the build report, or only the
/// manifest in dry-run mode. `RUST_LOG`, when set, replaces the
/// `--log-level` directive.
pub fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
