//! Tests for the file entry point.

mod common;

use std::fs;

use common::assert_stmt_locations;
use tempfile::tempdir;
use vult::ast::StmtKind;
use vult::parser::{ParseErrorKind, parse_file};

#[test]
fn test_parse_file_happy_path() {
    let dir = tempdir().expect("Failed to create a temporary directory");
    let path = dir.path().join("osc.vult");
    let source = "fun dsp(x:real) : real { return x * 0.5; }\n";
    fs::write(&path, source).expect("Failed to write the test file");

    let path = path.to_str().expect("Temporary path is not UTF-8");
    let results = parse_file(path);

    let blocks = results.outcome.expect("Expected a clean parse");
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0].kind, StmtKind::Block { .. }));
    assert_eq!(results.file, path);
    assert_eq!(results.lines.source(), source);

    // Spans point into the real file.
    for block in &blocks {
        assert_eq!(block.span.file, path);
        assert_stmt_locations(block);
    }
}

#[test]
fn test_parse_file_collects_errors_with_the_file_name() {
    let dir = tempdir().expect("Failed to create a temporary directory");
    let path = dir.path().join("broken.vult");
    fs::write(&path, "val x = ;\n").expect("Failed to write the test file");

    let path = path.to_str().expect("Temporary path is not UTF-8");
    let results = parse_file(path);

    let errors = results.outcome.expect_err("Expected an error outcome");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span.file, path);
}

#[test]
fn test_parse_file_missing_file_is_a_simple_error() {
    let results = parse_file("no/such/file.vult");
    let errors = results.outcome.expect_err("Expected an error outcome");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::Failed);
    assert_eq!(errors[0].message, "Failed to parse the file");
    assert!(errors[0].span.is_unknown());
    // Simple errors display without a location prefix.
    assert_eq!(errors[0].to_string(), "Failed to parse the file");
    assert_eq!(results.file, "no/such/file.vult");
}
