//! Lexical analysis error types.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// The lexer always advances past the offending input before returning
/// one of these, so the caller can keep pulling tokens; the token
/// stream relies on that to accumulate lexical errors without stopping.
#[derive(Debug, Clone)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    /// A character that cannot start any token.
    pub fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character '{}'", c),
            span,
        }
    }

    /// A `/*` comment that is still open at the end of the file.
    pub fn unterminated_comment(span: Span) -> Self {
        LexError {
            message: "Unterminated block comment".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.start.line, self.span.start.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
