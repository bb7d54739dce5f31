use tracing_subscriber::EnvFilter;

use crate::{error::LoggingError, logging::config::LoggingConfig};

/// `RUST_LOG` wins when it is set; otherwise the filter comes from the
/// config directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) => parse_filter(&directive),
        Err(_) => parse_filter(&config.build_filter_directive()),
    }
}

pub fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidDirective {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}
