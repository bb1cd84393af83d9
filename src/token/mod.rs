//! Token definitions for the Vult lexer.
//!
//! This module provides the fundamental token types used throughout the
//! parser. It defines [`Span`] for source location tracking,
//! [`TokenKind`] for token types, and [`Token`] for representing
//! lexical units with their positions.
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking ([`Span`], [`Position`])
//! - [`kind`] - Token type definitions ([`TokenKind`])
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::{Position, Span};

/// A token with its kind, raw lexeme and source location.
///
/// The `value` field always holds the exact source text of the token.
/// For `Op` tokens it is the only way to tell the operators apart; for
/// literals it is what the parser converts into a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The raw lexeme text.
    pub value: String,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token`. The caller is responsible for the span
    /// matching the token's position in the source.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Returns the description of this token used in diagnostics, e.g.
    /// `'val'` or `the end of the file`.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "the end of the file".to_string()
        } else {
            format!("'{}'", self.value)
        }
    }
}
