pub mod config;
mod filters;
mod formatter;
pub mod handle;

use std::io;

pub use self::config::{LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Installs the global `tracing` subscriber: a reloadable `EnvFilter` and a
/// console layer in the configured format.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(mut config: LoggingConfig) -> Result<LoggingHandle, LoggingError> {
    config.apply_env_overrides()?;
    config.validate()?;

    let (filter, filter_handle) = reload::Layer::new(filters::build_filter(&config)?);
    let console = formatter::build_layer(&config, io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = %config.format,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(config, filter_handle))
}
