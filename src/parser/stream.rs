//! The token stream consumed by the parser.
//!
//! A [`TokenStream`] wraps the lexer with a one-token lookahead buffer
//! and collects every error found along the way, which is what lets a
//! single parse report all problems in a file instead of stopping at
//! the first one.

use super::error::ParseError;
use crate::lexer::{Lexer, Lines};
use crate::token::{Span, Token, TokenKind};

/// A lexer with one token of lookahead and an error log.
///
/// Invariants the parser relies on:
/// - `peeked` always holds a token; past the end of input it stays an
///   `Eof` token with the last known location.
/// - `advance` moves `peeked` into `prev` and refills `peeked`, never
///   failing: lexical errors are logged and skipped during the refill.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    peeked: Token,
    prev: Token,
    has_errors: bool,
    errors: Vec<ParseError>,
    lines: Lines,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `source`, positioned on the first token.
    pub fn new(source: &'a str, file: impl Into<String>) -> Self {
        let file = file.into();
        let mut stream = TokenStream {
            lexer: Lexer::new(source, file),
            peeked: Token::new(TokenKind::Eof, "", Span::unknown()),
            prev: Token::new(TokenKind::Eof, "", Span::unknown()),
            has_errors: false,
            errors: Vec::new(),
            lines: Lines::new(source),
        };
        let first = stream.pull();
        stream.prev = first.clone();
        stream.peeked = first;
        stream
    }

    /// Pulls the next token out of the lexer, logging and skipping any
    /// lexical errors. Always returns; the lexer produces `Eof` forever
    /// once the input is exhausted.
    fn pull(&mut self) -> Token {
        loop {
            match self.lexer.next_token() {
                Ok(token) => return token,
                Err(error) => self.append_error(error.into()),
            }
        }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.peeked
    }

    /// Returns the kind of the current token without consuming it.
    pub fn peek_kind(&self) -> TokenKind {
        self.peeked.kind
    }

    /// Returns the span of the most recently consumed token.
    pub fn prev_span(&self) -> &Span {
        &self.prev.span
    }

    /// The location just past the last consumed token, where a missing
    /// token would have been.
    pub fn error_point(&self) -> Span {
        self.prev.span.point_after()
    }

    /// Unconditionally consumes the current token.
    pub fn advance(&mut self) {
        let next = self.pull();
        self.prev = std::mem::replace(&mut self.peeked, next);
    }

    /// Consumes and returns the current token.
    pub fn take(&mut self) -> Token {
        let token = self.peeked.clone();
        self.advance();
        token
    }

    /// Checks that the current token has the given kind, without
    /// consuming it.
    ///
    /// # Errors
    ///
    /// The standard missing-token errors, anchored just past the
    /// previous token: "Expecting a X but got Y", or "Expecting a X but
    /// the file ended" when the input is exhausted.
    pub fn expect(&self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peeked.kind == kind {
            Ok(())
        } else if self.peeked.kind == TokenKind::Eof {
            Err(ParseError::expecting_at_eof(kind, self.error_point()))
        } else {
            Err(ParseError::expecting(kind, &self.peeked, self.error_point()))
        }
    }

    /// Consumes the current token, requiring it to have the given kind.
    ///
    /// # Errors
    ///
    /// Same as [`expect`](Self::expect); nothing is consumed on error.
    pub fn consume(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        self.expect(kind)?;
        self.advance();
        Ok(())
    }

    /// Consumes the current token only if it has the given kind.
    /// Returns whether it did.
    pub fn opt_consume(&mut self, kind: TokenKind) -> bool {
        if self.peeked.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Records an error and marks the stream as failed.
    pub fn append_error(&mut self, error: ParseError) {
        self.has_errors = true;
        self.errors.push(error);
    }

    /// Returns `true` if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// The errors recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Tears the stream down into its accumulated state.
    pub(super) fn finish(self) -> (bool, Vec<ParseError>, Lines) {
        (self.has_errors, self.errors, self.lines)
    }
}
