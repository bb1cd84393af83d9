//! Source location tracking for the Vult parser.
//!
//! This module provides [`Span`], which records where a token or AST
//! node sits in its source file, and the merging operations the parser
//! uses to build node locations out of token locations.

/// A single point in a source file.
///
/// Tracks both the human-readable position (1-indexed line and column)
/// and the byte offset used to slice the source string for error
/// reports. The offset must be a valid UTF-8 character boundary; the
/// lexer guarantees this by advancing with `char::len_utf8()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The 1-indexed line number.
    pub line: usize,
    /// The 1-indexed column number.
    pub column: usize,
    /// The byte offset in the source string.
    pub offset: usize,
}

impl Position {
    /// Creates a new `Position`.
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

/// A range in a source file, together with the file name.
///
/// Every token and every AST node produced by the parser carries a
/// `Span`. The unknown span (empty file name) is used only for nodes
/// synthesized during error recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The name of the source file, or `""` when unknown.
    pub file: String,
    /// Where the range begins (inclusive).
    pub start: Position,
    /// Where the range ends (exclusive).
    pub end: Position,
}

impl Span {
    /// Creates a new `Span` covering `start..end` in `file`.
    pub fn new(file: impl Into<String>, start: Position, end: Position) -> Self {
        Span {
            file: file.into(),
            start,
            end,
        }
    }

    /// The span used when no location information is available.
    pub fn unknown() -> Self {
        Span {
            file: String::new(),
            start: Position::new(0, 0, 0),
            end: Position::new(0, 0, 0),
        }
    }

    /// Returns `true` if this is the unknown span.
    pub fn is_unknown(&self) -> bool {
        self.file.is_empty()
    }

    /// Combines two spans into one covering both.
    ///
    /// The result takes the earliest start and the latest end. Merging
    /// with the unknown span returns the other span unchanged, so the
    /// operation never invents a location. Merge is associative, which
    /// lets the parser fold token locations in any grouping.
    pub fn merge(&self, other: &Span) -> Span {
        if self.is_unknown() {
            return other.clone();
        }
        if other.is_unknown() {
            return self.clone();
        }
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Span {
            file: self.file.clone(),
            start,
            end,
        }
    }

    /// Returns the zero-width span sitting immediately past this one.
    ///
    /// Used to anchor diagnostics such as a missing `;`, which point at
    /// the gap after the last consumed token rather than at the token
    /// that happened to come next.
    pub fn point_after(&self) -> Span {
        Span {
            file: self.file.clone(),
            start: self.end,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(
            "test.vult",
            Position::new(1, start + 1, start),
            Position::new(1, end + 1, end),
        )
    }

    #[test]
    fn test_merge_takes_widest_range() {
        let merged = span(4, 8).merge(&span(0, 2));
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 8);
    }

    #[test]
    fn test_merge_with_unknown_left() {
        let merged = Span::unknown().merge(&span(3, 5));
        assert_eq!(merged, span(3, 5));
    }

    #[test]
    fn test_merge_with_unknown_right() {
        let merged = span(3, 5).merge(&Span::unknown());
        assert_eq!(merged, span(3, 5));
    }

    #[test]
    fn test_merge_is_associative() {
        let (a, b, c) = (span(0, 1), span(10, 12), span(4, 6));
        assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    #[test]
    fn test_point_after_is_zero_width() {
        let point = span(2, 7).point_after();
        assert_eq!(point.start, point.end);
        assert_eq!(point.start.offset, 7);
        assert_eq!(point.file, "test.vult");
    }

    #[test]
    fn test_unknown_span_is_unknown() {
        assert!(Span::unknown().is_unknown());
        assert!(!span(0, 1).is_unknown());
    }
}
