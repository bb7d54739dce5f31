/// Composite-literal codec: tokenizer, decoder, encoder and field tables.
pub mod codec;
/// Decoder options and settings loading.
pub mod config;
/// Menus, drinks and ingredient compositions.
pub mod domain;
/// Codec, validation, config and logging errors.
pub mod error;
/// `tracing` subscriber setup.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Encoding and decoding entry points.
pub use codec::{
    decode, encode, encode_composition, encode_drink, encode_drinks_by_category,
    encode_drinks_group, encode_menu, CompositeDecode, CompositeEncode, Decoder, Record,
};
/// Settings.
pub use self::config::{DecodeOptions, Settings};
/// Domain model.
pub use domain::{
    Composition, CookingMethod, Drink, DrinkCategory, DrinksByCategory, DrinksGroup, IceType,
    Liquid, Menu, SolidBulk, SolidUnit, Validate,
};
/// Error and result types.
pub use error::{ConfigError, DecodeError, DecodeResult, LoggingError, ValidationError};
/// Logging.
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingHandle};
