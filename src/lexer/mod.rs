//! Lexical analyzer for the Vult language.
//!
//! This module provides the [`Lexer`] struct, which converts source
//! text into [`Token`]s one at a time. The parser's token stream pulls
//! from it on demand; there is no up-front tokenization pass.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `if`, `then`, `else`, `fun`, `and`, `val`, `mem`,
//!   `return`, `while`, `type`, `table`, `true`, `false`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`, optionally dotted
//!   (`osc.out` is a single token)
//! - **Numbers**: integer literals, and real literals with a fractional
//!   part and/or exponent (`0.5`, `1e3`, `2.5e-3`)
//! - **Operators**: `+ - * / % == != < > <= >= && ||`
//! - **Punctuation**: `( ) { } : , ; = @` and the two-character
//!   delimiters `{|`, `|}`, `[|`, `|]`
//! - **Comments**: `//` line comments and `/* */` block comments
//!
//! # Examples
//!
//! ```
//! use vult::lexer::Lexer;
//! use vult::token::TokenKind;
//!
//! let mut lexer = Lexer::new("val x = 1;", "live.vult");
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Val);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - [`lines`] - Source-line table for diagnostics

mod cursor;
mod error;
mod lines;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;
pub use lines::Lines;

use crate::token::{Position, Span, Token, TokenKind};

/// A lexical analyzer producing Vult tokens on demand.
///
/// The `'a` lifetime ties the lexer to the input string slice. The
/// lexer never gets stuck: after an error it has advanced past the
/// offending input, and past the end of input it returns `Eof` tokens
/// indefinitely.
pub struct Lexer<'a> {
    /// The source code being tokenized.
    pub(super) input: &'a str,
    /// The file name recorded in every token span.
    pub(super) file: String,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over `input`, stamping `file` into every
    /// produced span.
    pub fn new(input: &'a str, file: impl Into<String>) -> Self {
        Lexer {
            input,
            file: file.into(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Reads and returns the next token.
    ///
    /// Once the input is exhausted this keeps returning an [`Eof`]
    /// token located at the end of the file.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for characters that cannot start a token,
    /// incomplete two-character delimiters, and unterminated block
    /// comments. The cursor has moved past the offending input, so the
    /// caller may keep pulling tokens.
    ///
    /// [`Eof`]: TokenKind::Eof
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let Some(c) = self.current_char() else {
            let here = Position::new(self.line, self.column, self.pos);
            let span = Span::new(self.file.clone(), here, here);
            return Ok(Token::new(TokenKind::Eof, "", span));
        };

        let mark = self.mark();
        if tokens::starts_identifier(c) {
            Ok(self.read_identifier_or_keyword(mark))
        } else if c.is_ascii_digit() {
            Ok(self.read_number(mark))
        } else {
            self.read_symbol(c, mark)
        }
    }
}
