//! The outcome record of a full parse.

use super::error::ParseError;
use crate::ast::Stmt;
use crate::lexer::Lines;

/// Everything a full parse produces.
///
/// A file with recoverable errors yields `Err` with every collected
/// error in source order; a clean file yields `Ok` with the list of
/// top-level blocks. The source-line table and file name ride along so
/// diagnostics can be rendered without going back to the file system.
#[derive(Debug)]
pub struct ParserResults {
    /// The parsed statements, or the accumulated errors.
    pub outcome: Result<Vec<Stmt>, Vec<ParseError>>,
    /// The source text, with per-line access.
    pub lines: Lines,
    /// The name of the parsed file.
    pub file: String,
}

impl ParserResults {
    /// Returns `true` if the parse produced no errors.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
