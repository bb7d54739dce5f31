use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use tracing_subscriber::filter::Directive;

use crate::error::LoggingError;

pub const ENV_LOG_LEVEL: &str = "BARMENU_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "BARMENU_LOG_FORMAT";

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Формат вывода логов в консоль.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    AsRefStr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level: trace, debug, info, warn, error or off.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_line_numbers: bool,
    /// Extra `EnvFilter` directives, e.g. `barmenu::codec=trace`.
    pub directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            with_ansi: true,
            with_target: true,
            with_line_numbers: false,
            directives: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Overrides level and format from `BARMENU_LOG_LEVEL` and
    /// `BARMENU_LOG_FORMAT` when they are set.
    pub fn apply_env_overrides(&mut self) -> Result<(), LoggingError> {
        if let Ok(level) = env::var(ENV_LOG_LEVEL) {
            self.level = level.trim().to_lowercase();
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            self.format = LogFormat::from_str(format.trim())
                .map_err(|_| LoggingError::InvalidFormat(format))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), LoggingError> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(LoggingError::InvalidLevel(self.level.clone()));
        }
        for directive in &self.directives {
            Directive::from_str(directive).map_err(|e| LoggingError::InvalidDirective {
                directive: directive.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// `EnvFilter` directive string: the base level followed by the extra
    /// directives.
    pub fn build_filter_directive(&self) -> String {
        let mut parts = Vec::with_capacity(self.directives.len() + 1);
        parts.push(self.level.to_lowercase());
        parts.extend(self.directives.iter().cloned());
        parts.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, LogFormat::Pretty);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.build_filter_directive(), "info");
    }

    #[test]
    fn test_filter_directive_with_extras() {
        let cfg = LoggingConfig {
            level: "WARN".into(),
            directives: vec!["barmenu::codec=trace".into()],
            ..LoggingConfig::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.build_filter_directive(), "warn,barmenu::codec=trace");
    }

    #[test]
    fn test_invalid_level() {
        let cfg = LoggingConfig {
            level: "loud".into(),
            ..LoggingConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_invalid_directive() {
        let cfg = LoggingConfig {
            directives: vec!["barmenu=notalevel".into()],
            ..LoggingConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LoggingError::InvalidDirective { .. })
        ));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert!(LogFormat::from_str("xml").is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
