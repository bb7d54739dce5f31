//! Static field tables for composite record types.
//!
//! A record's SQL composite type binds fields by position. Each record type
//! declares its fields once, in wire order, and both the encoder and the
//! decoder walk that same table.

use crate::{
    codec::{LiteralWriter, TokenReader},
    error::DecodeResult,
};

/// One positional field of a record type.
pub struct Field<R> {
    pub name: &'static str,
    pub encode: fn(&R, &mut LiteralWriter),
    pub decode: fn(&mut R, &mut TokenReader) -> DecodeResult<()>,
}

/// A value stored as a PostgreSQL composite type.
pub trait Record: Default + Sized + 'static {
    /// Name used in `CAST(... AS <TYPE_NAME>)`.
    const TYPE_NAME: &'static str;

    /// Fields in positional order.
    const FIELDS: &'static [Field<Self>];

    fn field_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|f| f.name).collect()
    }
}

/// Declares a record type's field table and hooks it into the codec.
///
/// ```ignore
/// composite_record!(Liquid, "Liquid" => [name, unit, volume]);
/// ```
macro_rules! composite_record {
    ($ty:ty, $sql:literal => [$($field:ident),+ $(,)?]) => {
        impl $crate::codec::Record for $ty {
            const TYPE_NAME: &'static str = $sql;
            const FIELDS: &'static [$crate::codec::Field<Self>] = &[$(
                $crate::codec::Field {
                    name: stringify!($field),
                    encode: |record: &$ty, out: &mut $crate::codec::LiteralWriter| {
                        $crate::codec::CompositeEncode::encode_field(&record.$field, out)
                    },
                    decode: |record: &mut $ty,
                             input: &mut $crate::codec::TokenReader|
                     -> $crate::error::DecodeResult<()> {
                        record.$field = $crate::codec::CompositeDecode::decode(input)?;
                        Ok(())
                    },
                }
            ),+];
        }

        impl $crate::codec::CompositeEncode for $ty {
            fn encode_field(
                &self,
                out: &mut $crate::codec::LiteralWriter,
            ) {
                out.write_record(self, true);
            }

            fn encode_element(
                &self,
                out: &mut $crate::codec::LiteralWriter,
            ) {
                out.write_record(self, false);
            }

            fn array_cast(_is_empty: bool) -> Option<&'static str> {
                Some($sql)
            }
        }

        impl $crate::codec::CompositeDecode for $ty {
            fn decode(input: &mut $crate::codec::TokenReader) -> $crate::error::DecodeResult<Self> {
                input.read_record::<Self>()
            }
        }
    };
}

pub(crate) use composite_record;

/// Hooks a closed `strum` tag enumeration into the codec as quoted snake_case
/// text.
macro_rules! composite_tag {
    ($ty:ty, $family:literal) => {
        impl $crate::codec::CompositeEncode for $ty {
            fn encode_field(
                &self,
                out: &mut $crate::codec::LiteralWriter,
            ) {
                out.write_text(self.as_ref());
            }

            fn array_cast(is_empty: bool) -> Option<&'static str> {
                is_empty.then_some("TEXT")
            }
        }

        impl $crate::codec::CompositeDecode for $ty {
            fn decode(input: &mut $crate::codec::TokenReader) -> $crate::error::DecodeResult<Self> {
                input.read_tag::<Self>($family)
            }
        }
    };
}

pub(crate) use composite_tag;
