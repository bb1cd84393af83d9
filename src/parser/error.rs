//! Parse error types.

use crate::lexer::LexError;
use crate::token::{Span, Token, TokenKind};

/// The class of a parse error.
///
/// Lets callers and tests react to the kind of failure without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing.
    UnexpectedToken,
    /// A required token was missing because the file ended.
    UnexpectedEof,
    /// A token that cannot start an expression.
    NotExpecting,
    /// A statement that looks like a binding but has no `=` or `;`.
    ExpectedBindingEqual,
    /// A `type` declaration with neither `:` nor `{` after its name.
    ExpectedTypeBody,
    /// Input the lexer could not turn into a token.
    InvalidToken,
    /// A numeric literal whose value cannot be represented.
    InvalidLiteral,
    /// An inconsistency in the parser itself.
    Internal,
    /// Parsing failed with no usable location (e.g. the file could not
    /// be read).
    Failed,
}

/// An error that occurred during parsing.
///
/// Most errors are pointed: they carry the location the parser was
/// looking at, typically the gap just past the last consumed token.
/// Errors of kind [`ParseErrorKind::Failed`] have no location and
/// display as a bare message.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The class of this error.
    pub kind: ParseErrorKind,
    /// A human-readable description of the error.
    pub message: String,
    /// The source location, or the unknown span for simple errors.
    pub span: Span,
}

impl ParseError {
    /// A required token was missing; `found` is what was there instead.
    pub fn expecting(expected: TokenKind, found: &Token, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!(
                "Expecting a {} but got {}",
                expected.describe(),
                found.describe()
            ),
            span,
        }
    }

    /// A required token was missing because the input ended.
    pub fn expecting_at_eof(expected: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof,
            message: format!("Expecting a {} but the file ended", expected.describe()),
            span,
        }
    }

    /// A token that cannot start an expression. Anchored just past the
    /// offending token.
    pub fn not_expecting(found: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::NotExpecting,
            message: format!("Not expecting to find {}", found.describe()),
            span: found.span.point_after(),
        }
    }

    /// A statement that parsed an expression but found neither `=` nor
    /// `;` after it; `lhs` is the printed form of that expression.
    pub fn binding_missing_equal(lhs: &str, found: &Token, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedBindingEqual,
            message: format!(
                "Expecting a '=' while trying to parse a binding ({}) but got {}",
                lhs,
                found.describe()
            ),
            span,
        }
    }

    /// A `type` declaration missing both of its possible bodies.
    pub fn expected_type_body(found: &Token, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedTypeBody,
            message: format!(
                "Expecting a ':' or a '{{' to define the type but got {}",
                found.describe()
            ),
            span,
        }
    }

    /// A numeric literal whose text does not convert to a value.
    pub fn invalid_literal(token: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidLiteral,
            message: format!("Invalid numeric literal '{}'", token.value),
            span: token.span.clone(),
        }
    }

    /// An inconsistency in the parser itself. These indicate a bug in
    /// this crate, not in the parsed program.
    pub fn internal(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::Internal,
            message: message.into(),
            span,
        }
    }

    /// The catch-all failure with no location.
    pub fn failed() -> Self {
        ParseError {
            kind: ParseErrorKind::Failed,
            message: "Failed to parse the file".to_string(),
            span: Span::unknown(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidToken,
            message: error.message,
            span: error.span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.span.is_unknown() {
            write!(f, "{}", self.message)
        } else {
            write!(
                f,
                "{}:{}: {}",
                self.span.start.line, self.span.start.column, self.message
            )
        }
    }
}

impl std::error::Error for ParseError {}
