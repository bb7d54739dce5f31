pub mod decode;
pub mod settings;
pub mod validation;

pub use decode::{DecodeError, DecodeResult};
pub use settings::{ConfigError, LoggingError};
pub use validation::ValidationError;
