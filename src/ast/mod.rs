//! Abstract Syntax Tree definitions for the Vult language.
//!
//! The AST is produced by the [`crate::parser`] and rendered back to
//! text by the [`crate::printer`]. Both [`Expr`] and [`Stmt`] are
//! closed sum types; pattern matching is the intended consumer idiom.
//! Every node carries a [`Span`](crate::token::Span); the nodes
//! synthesized during error recovery ([`ExprKind::Empty`],
//! [`StmtKind::Empty`]) carry the unknown span.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes, identifiers
//! - [`stmt`] - Statement nodes, parameters, attributes

mod expr;
mod stmt;

pub use expr::{Expr, ExprKind, Identifier, identifier_from_lexeme};
pub use stmt::{FunAttribute, NamedId, Stmt, StmtKind, ValDecl};
