//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use crate::core::config::LoggingConfig;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with the configured level as the default filter.
///
/// `RUST_LOG` still wins when set. Calling this twice is harmless: the
/// second logger is rejected and the rejection is only reported at debug
/// level through the logger already installed.
pub fn init_with_config(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(config.timestamps.then_some(env_logger::fmt::TimestampPrecision::Millis));

    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialized: {}", e);
    }
}
