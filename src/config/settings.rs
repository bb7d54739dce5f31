use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, logging::LoggingConfig};

/// Default upper bound on decoded input: 1 MiB.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;
/// Default nesting limit for records and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Limits and compatibility switches for the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Longer inputs are rejected before scanning.
    pub max_input_len: usize,
    pub max_depth: usize,
    /// Decode `{""}` as an empty collection.
    pub accept_degenerate_empty_array: bool,
    /// Decode an empty tag as the enum's default instead of failing.
    pub accept_empty_tag: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            accept_degenerate_empty_array: true,
            accept_empty_tag: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub decode: DecodeOptions,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads defaults, then `barmenu.toml` from the working directory if it
    /// exists, then `BARMENU_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(File::with_name("barmenu").required(false))
    }

    /// Same as [`Settings::load`] with an explicit, required config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(File::from(path).required(true))
    }

    fn load_with<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = DecodeOptions::default();

        let cfg = Config::builder()
            .set_default("decode.max_input_len", defaults.max_input_len as i64)?
            .set_default("decode.max_depth", defaults.max_depth as i64)?
            .set_default(
                "decode.accept_degenerate_empty_array",
                defaults.accept_degenerate_empty_array,
            )?
            .set_default("decode.accept_empty_tag", defaults.accept_empty_tag)?
            .add_source(file)
            // BARMENU_DECODE__MAX_DEPTH=16 -> decode.max_depth
            .add_source(
                Environment::with_prefix("BARMENU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decode.max_input_len == 0 {
            return Err(ConfigError::Invalid {
                field: "decode.max_input_len",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.decode.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "decode.max_depth",
                reason: "must be greater than zero".to_string(),
            });
        }
        self.logging
            .validate()
            .map_err(|e| ConfigError::Invalid {
                field: "logging",
                reason: e.to_string(),
            })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
