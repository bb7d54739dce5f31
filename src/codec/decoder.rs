use std::str::FromStr;

use barmenu_error::ErrorExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    codec::{Record, Token, TokenKind, Tokenizer},
    config::DecodeOptions,
    error::{DecodeError, DecodeResult},
};

/// A value that can be read back from composite literal text.
///
/// Dispatch is driven by the destination type: the caller names what it
/// expects and the implementation pulls the matching tokens.
pub trait CompositeDecode: Sized {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self>;
}

/// Cursor over the tokens of one composite literal.
pub struct TokenReader {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
    options: DecodeOptions,
}

/// Entry point for decoding with non-default [`DecodeOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes one complete value. Nothing but whitespace may follow it.
    pub fn decode<T: CompositeDecode>(
        &self,
        text: &str,
    ) -> DecodeResult<T> {
        let result = TokenReader::new(text, self.options).and_then(|mut input| {
            let value = T::decode(&mut input)?;
            input.finish()?;
            Ok(value)
        });

        match &result {
            Ok(_) => debug!(
                type_name = std::any::type_name::<T>(),
                len = text.len(),
                "Decoded composite literal"
            ),
            Err(err) => debug!(
                type_name = std::any::type_name::<T>(),
                position = err.position(),
                status_code = %err.status_code(),
                error = %err,
                "Composite literal decode failed"
            ),
        }

        result
    }
}

/// Decodes a value with the default [`DecodeOptions`].
pub fn decode<T: CompositeDecode>(text: &str) -> DecodeResult<T> {
    Decoder::default().decode(text)
}

impl TokenReader {
    pub fn new(
        text: &str,
        options: DecodeOptions,
    ) -> DecodeResult<Self> {
        if text.len() > options.max_input_len {
            return Err(DecodeError::SizeLimit {
                current: text.len(),
                max: options.max_input_len,
            });
        }

        Ok(Self {
            tokens: Tokenizer::tokenize(text),
            cursor: 0,
            depth: 0,
            options,
        })
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Current token. The cursor never moves past `Eof`.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    fn peek_kind_at(
        &self,
        offset: usize,
    ) -> &TokenKind {
        self.tokens
            .get(self.cursor + offset)
            .map_or(&TokenKind::Eof, |t| &t.kind)
    }

    pub fn position(&self) -> usize {
        self.peek().pos
    }

    pub fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    pub fn eat(
        &mut self,
        kind: &TokenKind,
    ) -> bool {
        if &self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn expect(
        &mut self,
        kind: TokenKind,
        context: &str,
    ) -> DecodeResult<Token> {
        if self.peek().kind == kind {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&kind.to_string(), context))
        }
    }

    /// Builds the error for the current token not being `expected`.
    pub fn unexpected(
        &self,
        expected: &str,
        context: &str,
    ) -> DecodeError {
        let token = self.peek();
        match &token.kind {
            TokenKind::Eof => DecodeError::UnexpectedEof {
                position: token.pos,
                context: context.to_string(),
            },
            found => DecodeError::UnexpectedToken {
                position: token.pos,
                expected: expected.to_string(),
                found: found.to_string(),
            },
        }
    }

    /// Consumes an empty quoted string if one is next.
    pub fn take_empty(&mut self) -> bool {
        if matches!(&self.peek().kind, TokenKind::Ident(text) if text.is_empty()) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Reads an ident run and re-joins it: words with single spaces, `-`
    /// without spaces on either side.
    pub fn read_text(&mut self) -> DecodeResult<String> {
        let mut text = String::new();
        let mut glued = true;
        let mut consumed = false;

        loop {
            match &self.peek().kind {
                TokenKind::Ident(word) | TokenKind::Int(word) => {
                    if !glued {
                        text.push(' ');
                    }
                    text.push_str(word);
                    glued = false;
                }
                TokenKind::Minus => {
                    text.push('-');
                    glued = true;
                }
                _ => break,
            }
            consumed = true;
            self.bump();
        }

        if !consumed {
            return Err(self.unexpected("text", "text value"));
        }
        Ok(text)
    }

    /// Reads `Int` or `Minus Int` and narrows it to `T`.
    pub fn read_integer<T>(
        &mut self,
        type_name: &str,
    ) -> DecodeResult<T>
    where
        T: TryFrom<i64>,
    {
        let position = self.position();
        let negative = self.eat(&TokenKind::Minus);

        let digits = match &self.peek().kind {
            TokenKind::Int(digits) => digits.clone(),
            TokenKind::Ident(word) if !word.is_empty() => {
                return Err(DecodeError::InvalidInteger {
                    position,
                    text: word.clone(),
                    reason: "not a decimal integer".to_string(),
                });
            }
            _ => return Err(self.unexpected("integer", "integer value")),
        };
        self.bump();

        let text = if negative {
            format!("-{digits}")
        } else {
            digits
        };

        let wide: i64 = text.parse().map_err(|e: std::num::ParseIntError| {
            DecodeError::InvalidInteger {
                position,
                text: text.clone(),
                reason: e.to_string(),
            }
        })?;

        T::try_from(wide).map_err(|_| DecodeError::InvalidInteger {
            position,
            text,
            reason: format!("out of range for {type_name}"),
        })
    }

    /// Reads the text of a closed tag enumeration. An empty string yields
    /// `T::default()` unless [`DecodeOptions::accept_empty_tag`] is off.
    pub fn read_tag<T: FromStr + Default>(
        &mut self,
        family: &'static str,
    ) -> DecodeResult<T> {
        let position = self.position();
        if self.take_empty() {
            if !self.options.accept_empty_tag {
                return Err(DecodeError::UnknownTag {
                    position,
                    family,
                    text: String::new(),
                });
            }
            warn!(position, family, "Empty tag decoded as the default value");
            return Ok(T::default());
        }

        let text = self.read_text()?;
        T::from_str(&text).map_err(|_| DecodeError::UnknownTag {
            position,
            family,
            text,
        })
    }

    /// Reads a positional record, optionally wrapped in a cast.
    pub fn read_record<R: Record>(&mut self) -> DecodeResult<R> {
        if self.take_empty() {
            return Ok(R::default());
        }

        self.with_cast(|input| {
            input.enter()?;
            input.expect(TokenKind::LParen, R::TYPE_NAME)?;

            let mut record = R::default();
            for (i, field) in R::FIELDS.iter().enumerate() {
                if i > 0 {
                    input.expect(TokenKind::Comma, R::TYPE_NAME)?;
                }
                (field.decode)(&mut record, input)?;
            }

            input.expect(TokenKind::RParen, R::TYPE_NAME)?;
            input.leave();
            Ok(record)
        })
    }

    /// Reads `{...}` or `ARRAY[...]` and collects the elements.
    pub fn read_sequence<T: CompositeDecode>(&mut self) -> DecodeResult<Vec<T>> {
        let mut items = Vec::new();
        self.read_elements(|input| {
            items.push(T::decode(input)?);
            Ok(())
        })?;
        Ok(items)
    }

    /// Walks the elements of a collection literal, handing each one to `each`
    /// with the cursor on its first token.
    pub fn read_elements<F>(
        &mut self,
        mut each: F,
    ) -> DecodeResult<()>
    where
        F: FnMut(&mut Self) -> DecodeResult<()>,
    {
        if self.take_empty() {
            return Ok(());
        }

        self.with_cast(|input| {
            input.enter()?;
            let open = input.position();

            let close = if input.eat(&TokenKind::LBrace) {
                TokenKind::RBrace
            } else if input.at_keyword("ARRAY", &TokenKind::LBracket) {
                input.bump();
                input.bump();
                TokenKind::RBracket
            } else {
                return Err(input.unexpected("'{' or ARRAY[", "array"));
            };

            if input.eat(&close) {
                input.leave();
                return Ok(());
            }

            if input.at_degenerate_empty(&close) {
                if !input.options.accept_degenerate_empty_array {
                    return Err(DecodeError::UnexpectedToken {
                        position: input.position(),
                        expected: "array element".to_string(),
                        found: TokenKind::Ident(String::new()).to_string(),
                    });
                }
                warn!(
                    position = open,
                    "Degenerate array literal decoded as an empty collection"
                );
                input.bump();
                input.bump();
                input.leave();
                return Ok(());
            }

            loop {
                each(input)?;
                if input.eat(&TokenKind::Comma) {
                    continue;
                }
                input.expect(close.clone(), "array")?;
                break;
            }

            input.leave();
            Ok(())
        })
    }

    /// Fails unless all input has been consumed.
    pub fn finish(&self) -> DecodeResult<()> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Eof => Ok(()),
            found => Err(DecodeError::TrailingInput {
                position: token.pos,
                found: found.to_string(),
            }),
        }
    }

    /// Runs `read` on the payload of `CAST(<payload> AS Type [ [] ])`, or on
    /// the input itself when no cast is present.
    fn with_cast<T, F>(
        &mut self,
        read: F,
    ) -> DecodeResult<T>
    where
        F: FnOnce(&mut Self) -> DecodeResult<T>,
    {
        if !self.at_keyword("CAST", &TokenKind::LParen) {
            return read(self);
        }
        self.bump();
        self.bump();

        let value = read(self)?;

        if !self.at_word("AS") {
            return Err(self.unexpected("AS", "cast"));
        }
        self.bump();

        let mut named = false;
        while matches!(&self.peek().kind, TokenKind::Ident(word) if !word.is_empty()) {
            self.bump();
            named = true;
        }
        if !named {
            return Err(self.unexpected("type name", "cast"));
        }

        if self.eat(&TokenKind::LBracket) {
            self.expect(TokenKind::RBracket, "cast")?;
        }
        self.expect(TokenKind::RParen, "cast")?;

        Ok(value)
    }

    fn at_word(
        &self,
        keyword: &str,
    ) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(word) if word.eq_ignore_ascii_case(keyword))
    }

    /// Case-insensitive keyword check with the token that must follow it.
    fn at_keyword(
        &self,
        keyword: &str,
        next: &TokenKind,
    ) -> bool {
        self.at_word(keyword) && self.peek_kind_at(1) == next
    }

    /// `{""}` / `ARRAY['']`: a lone empty string inside the brackets.
    fn at_degenerate_empty(
        &self,
        close: &TokenKind,
    ) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(text) if text.is_empty())
            && self.peek_kind_at(1) == close
    }

    fn enter(&mut self) -> DecodeResult<()> {
        if self.depth >= self.options.max_depth {
            return Err(DecodeError::DepthLimit {
                position: self.position(),
                max: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Реализации для базовых типов
////////////////////////////////////////////////////////////////////////////////

impl CompositeDecode for String {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self> {
        if input.take_empty() {
            return Ok(String::new());
        }
        input.read_text()
    }
}

impl CompositeDecode for u32 {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self> {
        if input.take_empty() {
            return Ok(0);
        }
        input.read_integer("u32")
    }
}

impl CompositeDecode for Uuid {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self> {
        if input.take_empty() {
            return Ok(Uuid::nil());
        }
        let position = input.position();
        let text = input.read_text()?;
        Uuid::parse_str(&text).map_err(|_| DecodeError::InvalidUuid { position, text })
    }
}

impl<T: CompositeDecode> CompositeDecode for Vec<T> {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self> {
        input.read_sequence()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
