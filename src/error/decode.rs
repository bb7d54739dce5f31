use std::any::Any;

use barmenu_error::{ErrorExt, StatusCode};
use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Ошибки декодирования composite-литерала.
///
/// Every variant carries the byte offset into the decoded text (except
/// [`DecodeError::SizeLimit`], which is raised before scanning).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unexpected token at position {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input at position {position} while reading {context}")]
    UnexpectedEof { position: usize, context: String },

    #[error("Invalid integer '{text}' at position {position}: {reason}")]
    InvalidInteger {
        position: usize,
        text: String,
        reason: String,
    },

    #[error("Unknown {family} '{text}' at position {position}")]
    UnknownTag {
        position: usize,
        family: &'static str,
        text: String,
    },

    #[error("Invalid UUID '{text}' at position {position}")]
    InvalidUuid { position: usize, text: String },

    #[error("Duplicate drink category '{category}' at position {position}")]
    DuplicateCategory { position: usize, category: String },

    #[error("Trailing input at position {position}: {found}")]
    TrailingInput { position: usize, found: String },

    #[error("Nesting depth limit exceeded at position {position}: max {max}")]
    DepthLimit { position: usize, max: usize },

    #[error("Size limit exceeded: {current} > {max} bytes")]
    SizeLimit { current: usize, max: usize },
}

impl DecodeError {
    /// Byte offset of the failure. `SizeLimit` reports the limit itself.
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEof { position, .. }
            | Self::InvalidInteger { position, .. }
            | Self::UnknownTag { position, .. }
            | Self::InvalidUuid { position, .. }
            | Self::DuplicateCategory { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::DepthLimit { position, .. } => *position,
            Self::SizeLimit { max, .. } => *max,
        }
    }
}

impl ErrorExt for DecodeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnexpectedToken { .. } | Self::TrailingInput { .. } => StatusCode::DecodingError,
            Self::UnexpectedEof { .. } => StatusCode::UnexpectedEof,
            Self::InvalidInteger { .. } => StatusCode::InvalidInteger,
            Self::UnknownTag { .. } => StatusCode::UnknownTag,
            Self::InvalidUuid { .. } | Self::DuplicateCategory { .. } => StatusCode::CorruptedData,
            Self::DepthLimit { .. } => StatusCode::DepthLimit,
            Self::SizeLimit { .. } => StatusCode::SizeLimit,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Stored composite columns are never echoed back to clients.
    fn client_message(&self) -> String {
        "Corrupt stored data".to_string()
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", "decode".to_string()),
            ("status_code", self.status_code().to_string()),
        ];
        if let Self::UnknownTag { family, .. } = self {
            tags.push(("tag_family", family.to_string()));
        }
        tags
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
