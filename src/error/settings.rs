use std::any::Any;

use barmenu_error::{ErrorExt, StatusCode};
use thiserror::Error;

/// Ошибки загрузки настроек.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Ошибки инициализации логирования.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Invalid filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Failed to install global subscriber: {0}")]
    Init(String),
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidConfig
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ErrorExt for LoggingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Init(_) => StatusCode::Internal,
            _ => StatusCode::InvalidConfig,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = ConfigError::Invalid {
            field: "decode.max_depth",
            reason: "must be positive".into(),
        };
        assert_eq!(err.status_code(), StatusCode::InvalidConfig);
        assert_eq!(
            LoggingError::Init("already set".into()).status_code(),
            StatusCode::Internal
        );
        assert_eq!(
            LoggingError::InvalidLevel("loud".into()).status_code(),
            StatusCode::InvalidConfig
        );
    }
}
