//! Logging initialization

/// Initialize `env_logger` with `default_level` as the filter.
///
/// `RUST_LOG` takes precedence when set. A second call is ignored.
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp_millis()
    .try_init();
}
