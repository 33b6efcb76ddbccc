//! Logging setup for the `spdx` binary.

use spdx_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins over the configured level.
fn filter_from_config(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install a stderr subscriber. Stdout carries the rendered expressions only.
pub fn init_logging(config: &LoggingConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    // A subscriber may already be set (e.g. in tests); the first one wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
