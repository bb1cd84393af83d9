//! Token recognition for the lexer.
//!
//! Methods for reading identifiers, keywords, numeric literals,
//! operators and punctuation from the input.

use super::Lexer;
use super::cursor::Mark;
use super::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads an identifier or keyword starting at `mark`.
    ///
    /// A `.` directly followed by an identifier-start character extends
    /// the same lexeme, so `osc.out` is one token; splitting the dotted
    /// name into segments is the parser's job.
    pub(super) fn read_identifier_or_keyword(&mut self, mark: Mark) -> Token {
        self.read_identifier_segment();
        while self.current_char() == Some('.')
            && matches!(self.peek_char(), Some(c) if is_identifier_start(c))
        {
            self.advance();
            self.read_identifier_segment();
        }

        let lexeme = self.lexeme_from(mark);
        let kind = match lexeme.as_str() {
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "fun" => TokenKind::Fun,
            "and" => TokenKind::And,
            "val" => TokenKind::Val,
            "mem" => TokenKind::Mem,
            "return" => TokenKind::Return,
            "while" => TokenKind::While,
            "type" => TokenKind::Type,
            "table" => TokenKind::Table,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, lexeme, self.span_from(mark))
    }

    fn read_identifier_segment(&mut self) {
        while matches!(self.current_char(), Some(c) if is_identifier_continue(c)) {
            self.advance();
        }
    }

    /// Reads an integer or real literal starting at `mark`.
    ///
    /// A fractional part or an exponent makes the token a `Real`;
    /// otherwise it is an `Int`. The lexeme keeps the raw text, the
    /// parser performs the numeric conversion.
    pub(super) fn read_number(&mut self, mark: Mark) -> Token {
        let mut is_real = false;

        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.')
            && matches!(self.peek_char(), Some(c) if c.is_ascii_digit())
        {
            is_real = true;
            self.advance();
            while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        if matches!(self.current_char(), Some('e' | 'E')) && self.exponent_follows() {
            is_real = true;
            self.advance();
            if matches!(self.current_char(), Some('+' | '-')) {
                self.advance();
            }
            while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let kind = if is_real {
            TokenKind::Real
        } else {
            TokenKind::Int
        };
        Token::new(kind, self.lexeme_from(mark), self.span_from(mark))
    }

    /// Checks that the `e`/`E` under the cursor begins a well-formed
    /// exponent, so that `1e` or `2e+` do not eat the `e`.
    fn exponent_follows(&self) -> bool {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        match chars.next() {
            Some('+' | '-') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Reads an operator or punctuation token starting with `c`.
    ///
    /// # Errors
    ///
    /// Returns an error for characters that cannot start a token and
    /// for incomplete two-character forms (a lone `[`, `!`, `&` or
    /// `|`). The offending characters are consumed first.
    pub(super) fn read_symbol(&mut self, c: char, mark: Mark) -> Result<Token, LexError> {
        self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '}' => TokenKind::RightBrace,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '@' => TokenKind::At,
            '{' => {
                if self.current_char() == Some('|') {
                    self.advance();
                    TokenKind::LeftSeq
                } else {
                    TokenKind::LeftBrace
                }
            }
            '[' => {
                if self.current_char() == Some('|') {
                    self.advance();
                    TokenKind::LeftArray
                } else {
                    return Err(LexError::unexpected_character(c, self.span_from(mark)));
                }
            }
            '|' => match self.current_char() {
                Some('|') => {
                    self.advance();
                    TokenKind::Op
                }
                Some('}') => {
                    self.advance();
                    TokenKind::RightSeq
                }
                Some(']') => {
                    self.advance();
                    TokenKind::RightArray
                }
                _ => return Err(LexError::unexpected_character(c, self.span_from(mark))),
            },
            '=' => {
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenKind::Op
                } else {
                    TokenKind::Equal
                }
            }
            '!' => {
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenKind::Op
                } else {
                    return Err(LexError::unexpected_character(c, self.span_from(mark)));
                }
            }
            '&' => {
                if self.current_char() == Some('&') {
                    self.advance();
                    TokenKind::Op
                } else {
                    return Err(LexError::unexpected_character(c, self.span_from(mark)));
                }
            }
            '<' | '>' => {
                if self.current_char() == Some('=') {
                    self.advance();
                }
                TokenKind::Op
            }
            '+' | '-' | '*' | '/' | '%' => TokenKind::Op,
            _ => return Err(LexError::unexpected_character(c, self.span_from(mark))),
        };
        Ok(Token::new(kind, self.lexeme_from(mark), self.span_from(mark)))
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub(super) fn starts_identifier(c: char) -> bool {
    is_identifier_start(c)
}
