//! The Vult language parser library.
//!
//! Vult is a small domain-specific language for signal-processing and
//! numeric code. This library provides the front end that turns Vult
//! source text into an abstract syntax tree: lexical analysis, a
//! Pratt-based expression parser, and a recursive descent statement
//! parser with panic-mode error recovery.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Token stream, expression and statement parsers
//! - [`printer`] - Renders the AST back to readable text
//!
//! # Example
//!
//! ```
//! use vult::parser;
//!
//! let results = parser::parse_string("fun dsp(x:real) : real { return x * 0.5; }");
//! assert!(results.outcome.is_ok());
//!
//! let exp = parser::parse_exp("1.0 + osc.phase").unwrap();
//! assert!(!exp.span.file.is_empty());
//! ```
//!
//! A file with syntax errors does not abort at the first problem; the
//! parser resynchronizes at statement boundaries and reports every
//! error it found:
//!
//! ```
//! use vult::parser;
//!
//! let results = parser::parse_string("val x = ; val y = 1;");
//! assert!(results.outcome.is_err());
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
