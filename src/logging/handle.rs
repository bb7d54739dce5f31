use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::{
    error::LoggingError,
    logging::{config::LoggingConfig, filters},
};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Handle to the installed subscriber: the effective configuration and a
/// way to swap the level filter at runtime.
pub struct LoggingHandle {
    config: LoggingConfig,
    filter: FilterHandle,
}

impl LoggingHandle {
    pub fn new(
        config: LoggingConfig,
        filter: FilterHandle,
    ) -> Self {
        Self { config, filter }
    }

    /// Configuration after environment overrides.
    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Replaces the active filter, e.g. `"debug"` or
    /// `"info,barmenu::codec=trace"`.
    pub fn reload_filter(
        &self,
        directive: &str,
    ) -> Result<(), LoggingError> {
        let filter = filters::parse_filter(directive)?;
        self.filter
            .reload(filter)
            .map_err(|e| LoggingError::Init(e.to_string()))?;

        tracing::info!(directive, "Log filter reloaded");
        Ok(())
    }

    /// Text form of the active filter.
    pub fn current_filter(&self) -> Option<String> {
        self.filter.with_current(|f| f.to_string()).ok()
    }
}
