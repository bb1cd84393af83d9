//! Diagnostic rendering for the Vult CLI.
//!
//! Turns recorded parse errors into ariadne reports on stderr, falling
//! back to plain messages when a report cannot be produced.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use vult::parser::{ParseError, ParserResults};

/// Reports every error in an error outcome. Does nothing for a clean
/// parse.
pub(crate) fn report_errors(results: &ParserResults) {
    let Err(errors) = &results.outcome else {
        return;
    };
    for error in errors {
        report_error(&results.file, results.lines.source(), error);
    }
}

fn report_error(filename: &str, source: &str, error: &ParseError) {
    if error.span.is_unknown() {
        eprintln!("Error in {}: {}", filename, error.message);
        return;
    }

    let range = label_range(source, error);
    if let Err(report_err) = print_range_report(filename, source, range, &error.message) {
        eprintln!(
            "Error: {} (at {}:{})",
            error.message, error.span.start.line, error.span.start.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// The byte range to underline for an error.
///
/// Missing-token errors carry a zero-width span pointing at a gap;
/// widen those to the following character so the label has something
/// to attach to, or to the last character when the gap is at the very
/// end of the source.
fn label_range(source: &str, error: &ParseError) -> Range<usize> {
    let start = error.span.start.offset.min(source.len());
    let end = error.span.end.offset.clamp(start, source.len());
    if end > start {
        return start..end;
    }
    match source[start..].chars().next() {
        Some(c) => start..start + c.len_utf8(),
        None => end_of_source_range(source),
    }
}

fn end_of_source_range(source: &str) -> Range<usize> {
    match source.char_indices().last() {
        Some((index, _)) => index..source.len(),
        None => 0..0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vult::parser::parse_string;

    fn first_error_range(input: &str) -> Range<usize> {
        let results = parse_string(input);
        let errors = results.outcome.as_ref().expect_err("Expected errors");
        label_range(results.lines.source(), &errors[0])
    }

    #[test]
    fn test_label_range_widens_zero_width_spans() {
        // The missing `;` points at the gap before `val`.
        let range = first_error_range("val x = 1 val y = 2;");
        assert!(!range.is_empty());
        assert!(range.start <= 10);
    }

    #[test]
    fn test_label_range_at_end_of_source() {
        let range = first_error_range("val x = 1");
        assert!(range.end <= "val x = 1".len());
    }

    #[test]
    fn test_end_of_source_range_for_empty_source() {
        assert_eq!(end_of_source_range(""), 0..0);
    }

    #[test]
    fn test_end_of_source_range_for_non_empty_source() {
        assert_eq!(end_of_source_range("abc"), 2..3);
    }
}
