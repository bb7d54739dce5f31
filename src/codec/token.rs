//! Tokenizer for composite literal text.
//!
//! The same scanner handles both directions of the wire:
//! - the SQL expressions produced by the encoder
//!   (`CAST((2, CAST(ARRAY[('Tonic Water', 'ml', 200)] AS Liquid [])...) AS Composition)`);
//! - the text the engine returns for a composite column
//!   (`(2,"{""(\\""Tonic Water\\"",ml,200)""}",{},{})`).
//!
//! Quotes and backslashes carry no structure in either form and are skipped.
//! The only exception is an empty quoted string standing alone in a value
//! position, which becomes `Ident("")`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Int(String),
    Minus,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Eof,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// `true` when the next token would start a value: beginning of input or
    /// right after `(`, `{`, `[` or `,`.
    value_position: bool,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            value_position: true,
            finished: false,
        }
    }

    /// Scans the whole input. The result always ends with exactly one `Eof`.
    pub fn tokenize(input: &'a str) -> Vec<Token> {
        let mut tokenizer = Self::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if eof {
                return tokens;
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(c) = self.peek_char() else {
                return Token {
                    kind: TokenKind::Eof,
                    pos: self.input.len(),
                };
            };
            let start = self.pos;

            let kind = match c {
                '"' | '\'' | '\\' => {
                    self.skip_quote_run();
                    if self.value_position && self.at_closer() {
                        TokenKind::Ident(String::new())
                    } else {
                        continue;
                    }
                }
                ',' => self.punct(TokenKind::Comma),
                '-' => self.punct(TokenKind::Minus),
                '(' => self.punct(TokenKind::LParen),
                ')' => self.punct(TokenKind::RParen),
                '{' => self.punct(TokenKind::LBrace),
                '}' => self.punct(TokenKind::RBrace),
                '[' => self.punct(TokenKind::LBracket),
                ']' => self.punct(TokenKind::RBracket),
                _ => self.word(),
            };

            self.value_position = matches!(
                kind,
                TokenKind::Comma | TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket
            );
            return Token { kind, pos: start };
        }
    }

    fn punct(
        &mut self,
        kind: TokenKind,
    ) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn word(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if is_delimiter(c) {
                break;
            }
            self.pos += c.len_utf8();
        }

        let text = &self.input[start..self.pos];
        if text.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Int(text.to_string())
        } else {
            TokenKind::Ident(text.to_string())
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn skip_quote_run(&mut self) {
        while let Some(c) = self.peek_char() {
            if !is_quote(c) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Is the next significant character a closer (or the end of input)?
    fn at_closer(&self) -> bool {
        match self.input[self.pos..].trim_start().chars().next() {
            None => true,
            Some(c) => matches!(c, ',' | ')' | '}' | ']'),
        }
    }

    fn peek_char(&self) -> Option<char> {
        if self.finished {
            return None;
        }
        self.input[self.pos..].chars().next()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '\\')
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_quote(c) || matches!(c, ',' | '(' | ')' | '{' | '}' | '[' | ']' | '-')
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Ident(text) if text.is_empty() => write!(f, "empty string"),
            Self::Ident(text) => write!(f, "identifier '{text}'"),
            Self::Int(text) => write!(f, "integer {text}"),
            Self::Minus => write!(f, "'-'"),
            Self::Comma => write!(f, "','"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}
