//! Unit tests for the lexer.

use super::*;

/// Helper that drains the lexer, panicking on lexical errors.
fn lex(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input, "test.vult");
    let mut tokens = Vec::new();
    loop {
        let token = lexer
            .next_token()
            .unwrap_or_else(|e| panic!("Lexer failed on input {:?}: {}", input, e));
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).into_iter().map(|t| t.kind).collect()
}

// ===================
// Identifiers and keywords
// ===================

#[test]
fn test_keywords() {
    let input = "if then else fun and val mem return while type table true false";
    assert_eq!(
        kinds(input),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Fun,
            TokenKind::And,
            TokenKind::Val,
            TokenKind::Mem,
            TokenKind::Return,
            TokenKind::While,
            TokenKind::Type,
            TokenKind::Table,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier() {
    let tokens = lex("phase _tmp x2");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "phase");
    assert_eq!(tokens[1].value, "_tmp");
    assert_eq!(tokens[2].value, "x2");
}

#[test]
fn test_dotted_identifier_is_one_token() {
    let tokens = lex("osc.out");
    assert_eq!(tokens.len(), 2); // identifier + eof
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "osc.out");
}

#[test]
fn test_deeply_dotted_identifier() {
    let tokens = lex("a.b.c");
    assert_eq!(tokens[0].value, "a.b.c");
}

#[test]
fn test_keyword_lexeme_is_raw_text() {
    let tokens = lex("return");
    assert_eq!(tokens[0].kind, TokenKind::Return);
    assert_eq!(tokens[0].value, "return");
}

// ===================
// Numbers
// ===================

#[test]
fn test_int_literal() {
    let tokens = lex("42");
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
}

#[test]
fn test_real_literal_fraction() {
    let tokens = lex("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Real);
    assert_eq!(tokens[0].value, "3.14");
}

#[test]
fn test_real_literal_exponent() {
    let tokens = lex("1e3 2.5e-3 7E+2");
    assert_eq!(tokens[0].kind, TokenKind::Real);
    assert_eq!(tokens[0].value, "1e3");
    assert_eq!(tokens[1].kind, TokenKind::Real);
    assert_eq!(tokens[1].value, "2.5e-3");
    assert_eq!(tokens[2].kind, TokenKind::Real);
    assert_eq!(tokens[2].value, "7E+2");
}

#[test]
fn test_int_followed_by_identifier_e() {
    // `1e` has no exponent digits: the `e` starts an identifier.
    let tokens = lex("1e");
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "e");
}

// ===================
// Operators and punctuation
// ===================

#[test]
fn test_single_char_operators() {
    for op in ["+", "-", "*", "/", "%", "<", ">"] {
        let tokens = lex(op);
        assert_eq!(tokens[0].kind, TokenKind::Op, "operator {:?}", op);
        assert_eq!(tokens[0].value, op);
    }
}

#[test]
fn test_two_char_operators() {
    for op in ["==", "!=", "<=", ">=", "&&", "||"] {
        let tokens = lex(op);
        assert_eq!(tokens[0].kind, TokenKind::Op, "operator {:?}", op);
        assert_eq!(tokens[0].value, op);
    }
}

#[test]
fn test_equal_is_not_an_operator() {
    let tokens = lex("=");
    assert_eq!(tokens[0].kind, TokenKind::Equal);
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("( ) { } : , ; @"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::At,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_seq_and_array_delimiters() {
    assert_eq!(
        kinds("{| |} [| |]"),
        vec![
            TokenKind::LeftSeq,
            TokenKind::RightSeq,
            TokenKind::LeftArray,
            TokenKind::RightArray,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_brace_pipe_requires_adjacency() {
    // `{ |` with a space is a brace followed by a broken pipe.
    let mut lexer = Lexer::new("{ |", "test.vult");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LeftBrace);
    assert!(lexer.next_token().is_err());
}

// ===================
// Comments and whitespace
// ===================

#[test]
fn test_line_comment() {
    assert_eq!(
        kinds("val // comment\nx"),
        vec![TokenKind::Val, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_block_comment() {
    assert_eq!(
        kinds("val /* a\n b */ x"),
        vec![TokenKind::Val, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let mut lexer = Lexer::new("val /* oops", "test.vult");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Val);
    let error = lexer.next_token().expect_err("Expected a lexical error");
    assert!(error.message.contains("Unterminated"));
    // The comment consumed the rest of the input.
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

// ===================
// Error behavior
// ===================

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("$val", "test.vult");
    let error = lexer.next_token().expect_err("Expected a lexical error");
    assert!(error.message.contains("Unexpected character '$'"));
    // The bad character was consumed; lexing resumes.
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Val);
}

#[test]
fn test_lone_bracket_is_an_error() {
    let mut lexer = Lexer::new("[1", "test.vult");
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Int);
}

#[test]
fn test_lone_bang_is_an_error() {
    let mut lexer = Lexer::new("!x", "test.vult");
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
}

// ===================
// End of file
// ===================

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x", "test.vult");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    let first = lexer.next_token().unwrap();
    let second = lexer.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::Eof);
    assert_eq!(second.kind, TokenKind::Eof);
    assert_eq!(first.span, second.span);
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("", "test.vult");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

// ===================
// Source locations
// ===================

#[test]
fn test_span_tracks_lines_and_columns() {
    let tokens = lex("val x\nmem y");
    let mem = &tokens[2];
    assert_eq!(mem.kind, TokenKind::Mem);
    assert_eq!(mem.span.start.line, 2);
    assert_eq!(mem.span.start.column, 1);
    assert_eq!(mem.span.file, "test.vult");

    let y = &tokens[3];
    assert_eq!(y.span.start.line, 2);
    assert_eq!(y.span.start.column, 5);
}

#[test]
fn test_span_offsets_cover_lexeme() {
    let tokens = lex("  osc.out");
    let id = &tokens[0];
    assert_eq!(id.span.start.offset, 2);
    assert_eq!(id.span.end.offset, 9);
}
