//! Parser for the Vult language.
//!
//! The parser turns a token stream into the AST defined in
//! [`crate::ast`]. Expressions are parsed with a Pratt (operator
//! precedence) parser, statements by recursive descent; when a
//! statement fails to parse, the parser records the error, skips to
//! the next statement boundary and keeps going, so a single parse
//! reports every error in the file.
//!
//! # Examples
//!
//! ```
//! use vult::ast::{ExprKind, StmtKind};
//! use vult::parser;
//!
//! let exp = parser::parse_exp("1 + 2 * 3").unwrap();
//! assert!(matches!(exp.kind, ExprKind::BinOp { .. }));
//!
//! let results = parser::parse_string("fun one() : int { return 1; }");
//! let blocks = results.outcome.unwrap();
//! assert_eq!(blocks.len(), 1);
//! assert!(matches!(blocks[0].kind, StmtKind::Block { .. }));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `stream` - Token stream with one-token lookahead and error log
//! - `expr` - Pratt expression parsing
//! - `stmt` - Statement parsing and panic-mode recovery
//! - `results` - The record a full parse produces
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the tokens consumed here
//! * [`crate::printer`] - Renders the produced AST back to text

mod error;
mod expr;
mod results;
mod stmt;
mod stream;


pub use error::{ParseError, ParseErrorKind};
pub use results::ParserResults;
pub use stream::TokenStream;

use crate::ast::{Expr, Stmt};
use crate::lexer::Lines;
use crate::printer;
use crate::token::TokenKind;

/// The file name recorded when parsing from a string.
const LIVE_FILENAME: &str = "live.vult";

/// A parser over a single source text.
///
/// Most callers want the free functions of this module ([`parse_file`],
/// [`parse_string`], [`parse_exp`], ...). The struct is public for
/// callers that need finer control, such as pulling statements one at
/// a time.
pub struct Parser<'a> {
    stream: TokenStream<'a>,
    file: String,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source`, recording `file` in every span.
    pub fn new(source: &'a str, file: impl Into<String>) -> Self {
        let file = file.into();
        Parser {
            stream: TokenStream::new(source, file.clone()),
            file,
        }
    }

    /// The errors recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        self.stream.errors()
    }

    /// Returns `true` if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.stream.has_errors()
    }

    /// Parses the whole input as a sequence of statement blocks.
    ///
    /// Statement-level errors have been recovered and recorded along
    /// the way; the only error that can escape `stmt_list` is an
    /// unclosed block at the end of the file, which is recorded here
    /// and ends the loop at the `Eof` it stopped on.
    pub fn parse_buffer(mut self) -> ParserResults {
        let mut blocks = Vec::new();
        while self.stream.peek_kind() != TokenKind::Eof {
            match self.stmt_list() {
                Ok(block) => blocks.push(block),
                Err(error) => self.stream.append_error(error),
            }
        }
        let Parser { stream, file } = self;
        let (has_errors, errors, lines) = stream.finish();
        let outcome = if has_errors { Err(errors) } else { Ok(blocks) };
        ParserResults {
            outcome,
            lines,
            file,
        }
    }

    /// The first recorded error, if any.
    fn first_error(&self) -> Option<ParseError> {
        self.stream.errors().first().cloned()
    }
}

/// Parses a single expression from `text`.
///
/// # Errors
///
/// The first error found, including lexical ones.
pub fn parse_exp(text: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(text, LIVE_FILENAME);
    let exp = parser.expression(0)?;
    match parser.first_error() {
        Some(error) => Err(error),
        None => Ok(exp),
    }
}

/// Parses a single statement from `text`.
///
/// # Errors
///
/// The first error found; the returned statement is never the empty
/// statement that recovery would produce.
pub fn parse_stmt(text: &str) -> Result<Stmt, ParseError> {
    let mut parser = Parser::new(text, LIVE_FILENAME);
    let stmt = parser.statement();
    match parser.first_error() {
        Some(error) => Err(error),
        None => Ok(stmt),
    }
}

/// Parses a statement block (or a single statement wrapped in a block)
/// from `text`.
///
/// # Errors
///
/// The first error found.
pub fn parse_stmt_list(text: &str) -> Result<Stmt, ParseError> {
    let mut parser = Parser::new(text, LIVE_FILENAME);
    let block = parser.stmt_list()?;
    match parser.first_error() {
        Some(error) => Err(error),
        None => Ok(block),
    }
}

/// Parses source text into a full [`ParserResults`], under the
/// synthetic file name `live.vult`.
pub fn parse_string(text: &str) -> ParserResults {
    Parser::new(text, LIVE_FILENAME).parse_buffer()
}

/// Reads and parses `filename`.
///
/// A file that cannot be read produces an error outcome with the
/// single catch-all failure; the file handle is released on every
/// path.
pub fn parse_file(filename: &str) -> ParserResults {
    match std::fs::read_to_string(filename) {
        Ok(source) => Parser::new(&source, filename).parse_buffer(),
        Err(_) => ParserResults {
            outcome: Err(vec![ParseError::failed()]),
            lines: Lines::new(""),
            file: filename.to_string(),
        },
    }
}

/// Parses a single expression and renders it back to text.
///
/// # Errors
///
/// Same as [`parse_exp`].
pub fn parse_dump_exp(text: &str) -> Result<String, ParseError> {
    Ok(printer::print_expr(&parse_exp(text)?))
}

/// Parses a statement block and renders it back to text.
///
/// # Errors
///
/// Same as [`parse_stmt_list`].
pub fn parse_dump_stmt_list(text: &str) -> Result<String, ParseError> {
    Ok(printer::print_stmt(&parse_stmt_list(text)?))
}
