//! Whitespace and comment handling for the lexer.

use super::Lexer;
use super::error::LexError;

impl<'a> Lexer<'a> {
    /// Skips whitespace, `//` line comments and `/* */` block comments.
    ///
    /// On return the cursor sits on the first character of the next
    /// token, or at the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error for a block comment that is never closed. The
    /// cursor has consumed the rest of the input in that case, so the
    /// next call simply reports the end of the file.
    pub(super) fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            while matches!(self.current_char(), Some(c) if c.is_whitespace()) {
                self.advance();
            }

            if self.current_char() == Some('/') && self.peek_char() == Some('/') {
                while !self.is_eof() && self.current_char() != Some('\n') {
                    self.advance();
                }
                continue;
            }

            if self.current_char() == Some('/') && self.peek_char() == Some('*') {
                let start = self.mark();
                self.advance();
                self.advance();
                loop {
                    if self.is_eof() {
                        return Err(LexError::unterminated_comment(self.span_from(start)));
                    }
                    if self.current_char() == Some('*') && self.peek_char() == Some('/') {
                        self.advance();
                        self.advance();
                        break;
                    }
                    self.advance();
                }
                continue;
            }

            return Ok(());
        }
    }
}
