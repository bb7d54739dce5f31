use tracing::debug;
use uuid::Uuid;

use crate::codec::Record;

/// A value that can be written into a composite SQL literal.
pub trait CompositeEncode {
    /// Writes the value where it stands on its own or as a record field.
    /// Records are wrapped in `CAST(... AS Type)` here.
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    );

    /// Writes the value as an array element. Records are emitted bare because
    /// the surrounding array cast already names their type.
    fn encode_element(
        &self,
        out: &mut LiteralWriter,
    ) {
        self.encode_field(out);
    }

    /// Element type for `CAST(ARRAY[...] AS <type> [])`, or `None` to emit a
    /// bare `ARRAY[...]`.
    fn array_cast(_is_empty: bool) -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }
}

/// Output buffer for SQL composite literals.
#[derive(Debug, Default)]
pub struct LiteralWriter {
    buf: String,
}

impl LiteralWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Single-quoted SQL string; embedded `'` is doubled.
    pub fn write_text(
        &mut self,
        text: &str,
    ) {
        self.buf.reserve(text.len() + 2);
        self.buf.push('\'');
        for ch in text.chars() {
            if ch == '\'' {
                self.buf.push_str("''");
            } else {
                self.buf.push(ch);
            }
        }
        self.buf.push('\'');
    }

    pub fn write_uint(
        &mut self,
        value: u64,
    ) {
        self.buf.push_str(&value.to_string());
    }

    /// `(f1, f2, ...)`, or `CAST((f1, f2, ...) AS Type)` when `cast` is set.
    pub fn write_record<R: Record>(
        &mut self,
        record: &R,
        cast: bool,
    ) {
        if cast {
            self.buf.push_str("CAST(");
        }

        self.buf.push('(');
        for (i, field) in R::FIELDS.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            (field.encode)(record, self);
        }
        self.buf.push(')');

        if cast {
            self.buf.push_str(" AS ");
            self.buf.push_str(R::TYPE_NAME);
            self.buf.push(')');
        }
    }

    /// `ARRAY[e1,e2]`, wrapped in `CAST(... AS Elem [])` when the element
    /// type asks for it.
    pub fn write_array<T: CompositeEncode>(
        &mut self,
        items: &[T],
    ) {
        self.push_array(items, " [])");
    }

    /// Same as [`write_array`](Self::write_array) but closes the cast as
    /// `AS Elem[])`.
    pub fn write_array_tight<T: CompositeEncode>(
        &mut self,
        items: &[T],
    ) {
        self.push_array(items, "[])");
    }

    /// Appends `text` verbatim.
    pub fn write_raw(
        &mut self,
        text: &str,
    ) {
        self.buf.push_str(text);
    }

    fn push_array<T: CompositeEncode>(
        &mut self,
        items: &[T],
        cast_close: &str,
    ) {
        let cast = T::array_cast(items.is_empty());
        if cast.is_some() {
            self.buf.push_str("CAST(");
        }

        self.buf.push_str("ARRAY[");
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            item.encode_element(self);
            if i != last {
                self.buf.push(',');
            }
        }
        self.buf.push(']');

        if let Some(elem) = cast {
            self.buf.push_str(" AS ");
            self.buf.push_str(elem);
            self.buf.push_str(cast_close);
        }
    }
}

/// Encodes a value into its SQL composite literal. Never fails.
pub fn encode<T: CompositeEncode>(value: &T) -> String {
    let mut out = LiteralWriter::with_capacity(64);
    value.encode_field(&mut out);

    debug!(
        type_name = std::any::type_name::<T>(),
        len = out.len(),
        "Encoded composite literal"
    );

    out.into_string()
}

////////////////////////////////////////////////////////////////////////////////
// Реализации для базовых типов
////////////////////////////////////////////////////////////////////////////////

impl CompositeEncode for String {
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    ) {
        out.write_text(self);
    }

    fn array_cast(is_empty: bool) -> Option<&'static str> {
        is_empty.then_some("TEXT")
    }
}

impl CompositeEncode for u32 {
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    ) {
        out.write_uint(u64::from(*self));
    }

    /// A non-empty integer array types itself; an empty one must be cast.
    fn array_cast(is_empty: bool) -> Option<&'static str> {
        is_empty.then_some("INTEGER")
    }
}

impl CompositeEncode for Uuid {
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    ) {
        out.write_text(&self.hyphenated().to_string());
    }

    fn array_cast(is_empty: bool) -> Option<&'static str> {
        is_empty.then_some("UUID")
    }
}

impl<T: CompositeEncode> CompositeEncode for Vec<T> {
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    ) {
        out.write_array(self);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
