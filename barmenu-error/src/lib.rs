pub mod ext;
pub mod status_code;

pub use ext::ErrorExt;
pub use status_code::StatusCode;
