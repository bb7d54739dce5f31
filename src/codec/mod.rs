//! Composite-literal codec.
//!
//! [`encode`] turns a domain value into the SQL expression written into a
//! composite or array column. [`decode`] reads the text the engine returns
//! for such a column (and the encoder's own output) back into a value.

pub mod decoder;
pub mod encoder;
pub mod schema;
pub mod token;

pub use decoder::{decode, CompositeDecode, Decoder, TokenReader};
pub use encoder::{encode, CompositeEncode, LiteralWriter};
pub(crate) use schema::{composite_record, composite_tag};
pub use schema::{Field, Record};
pub use token::{Token, TokenKind, Tokenizer};

use tracing::debug;

use crate::domain::{Composition, Drink, DrinksByCategory, DrinksGroup, Menu};

/// `CAST((ice, CAST(ARRAY[...] AS Liquid []), ...) AS Composition)`
pub fn encode_composition(composition: &Composition) -> String {
    encode(composition)
}

/// `CAST((id, 'name', 'category', 'method', CAST(... AS Composition), ...) AS Drink)`
pub fn encode_drink(drink: &Drink) -> String {
    encode(drink)
}

/// `CAST(('category', CAST(ARRAY[...] AS Drink[])) AS DrinksGroup)`
///
/// The drinks cast is closed without a space before `[]`, unlike every other
/// array cast the codec writes. A group nested in [`encode_drinks_by_category`]
/// keeps the spaced form.
pub fn encode_drinks_group(group: &DrinksGroup) -> String {
    let mut out = LiteralWriter::with_capacity(64);
    out.write_raw("CAST((");
    out.write_text(&group.category);
    out.write_raw(", ");
    out.write_array_tight(&group.drinks);
    out.write_raw(") AS ");
    out.write_raw(<DrinksGroup as Record>::TYPE_NAME);
    out.write_raw(")");

    debug!(len = out.len(), "Encoded drinks group literal");

    out.into_string()
}

/// `CAST(ARRAY[('category', CAST(ARRAY[...] AS Drink [])),...] AS DrinksGroup [])`
pub fn encode_drinks_by_category(drinks: &DrinksByCategory) -> String {
    encode(drinks)
}

/// `CAST(('id', 'user_id', 'name', CAST(ARRAY[...] AS DrinksGroup []), total) AS Menu)`
pub fn encode_menu(menu: &Menu) -> String {
    encode(menu)
}
