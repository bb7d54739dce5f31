pub mod settings;

pub use settings::{DecodeOptions, Settings, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};
