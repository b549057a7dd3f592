//! Logging system initialization

use tracing_subscriber::EnvFilter;

/// Initialize tracing output to stdout.
///
/// The returned guard must be kept alive for the duration of the program so
/// that non-blocking log writes are flushed on shutdown. Call once at
/// startup; a second call panics on subscriber re-registration.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .init();

    guard
}
