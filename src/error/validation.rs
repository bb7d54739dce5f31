use std::any::Any;

use barmenu_error::{ErrorExt, StatusCode};
use thiserror::Error;

/// Text that the composite wire format cannot carry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' contains forbidden character {character:?}: {value:?}")]
    ForbiddenCharacter {
        field: String,
        value: String,
        character: char,
    },

    #[error("Field '{field}' has malformed whitespace: {value:?}")]
    MalformedWhitespace { field: String, value: String },

    #[error("Drink category name cannot be empty")]
    EmptyCategory,
}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidValue
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_client_error() {
        let err = ValidationError::ForbiddenCharacter {
            field: "name".into(),
            value: "Gin, Tonic".into(),
            character: ',',
        };
        assert!(err.status_code().is_client_error());
        assert_eq!(err.client_message(), err.to_string());
    }
}
