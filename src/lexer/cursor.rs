//! Cursor position management for the lexer.
//!
//! Methods for inspecting and advancing the lexer's position within the
//! input source code.

use super::Lexer;
use crate::token::{Position, Span};

/// A saved cursor position, marking where a token starts.
#[derive(Debug, Clone, Copy)]
pub(super) struct Mark {
    pub(super) pos: usize,
    pub(super) line: usize,
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Returns the current character without consuming it, or `None`
    /// at the end of input.
    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without consuming.
    pub(super) fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances the lexer by one character.
    ///
    /// Handles multi-byte UTF-8 characters correctly and increments the
    /// line counter on newlines.
    pub(super) fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Saves the current position as the start of a token.
    pub(super) fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Builds the span from a saved mark to the current position.
    pub(super) fn span_from(&self, mark: Mark) -> Span {
        Span::new(
            self.file.clone(),
            Position::new(mark.line, mark.column, mark.pos),
            Position::new(self.line, self.column, self.pos),
        )
    }

    /// Returns the raw source text between a saved mark and the current
    /// position.
    pub(super) fn lexeme_from(&self, mark: Mark) -> String {
        self.input[mark.pos..self.pos].to_string()
    }
}
