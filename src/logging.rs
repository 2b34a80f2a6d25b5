//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with a default filter level of `warn` so that normal
/// command output is not interleaved with log lines. Override with the
/// RUST_LOG environment variable, e.g. `RUST_LOG=debug`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}
