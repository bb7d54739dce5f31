pub mod composition;
pub mod drink;
pub mod menu;

pub use composition::{Composition, Liquid, SolidBulk, SolidUnit};
pub use drink::{CookingMethod, Drink, DrinkCategory, IceType};
pub use menu::{DrinksByCategory, DrinksGroup, Menu};

use crate::error::ValidationError;

/// Characters that carry structure in composite literals and therefore
/// cannot appear inside stored text.
pub const FORBIDDEN_CHARS: &[char] = &[',', '(', ')', '{', '}', '[', ']', '"', '\\', '\''];

/// Checks that every text field survives an encode/decode round trip.
///
/// Repository adapters call this before encoding; the encoder itself never
/// rejects a value.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Text is safe when it has no structural characters, single spaces between
/// words and no spaces around `-`.
pub(crate) fn check_text(
    field: &str,
    value: &str,
) -> Result<(), ValidationError> {
    if let Some(character) = value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(ValidationError::ForbiddenCharacter {
            field: field.to_string(),
            value: value.to_string(),
            character,
        });
    }

    let malformed = value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.chars().any(|c| c.is_whitespace() && c != ' ')
        || value.contains("  ")
        || value.contains(" -")
        || value.contains("- ");

    if malformed {
        return Err(ValidationError::MalformedWhitespace {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}
