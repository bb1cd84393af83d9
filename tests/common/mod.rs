//! Common test utilities for Vult integration tests.
//!
//! This module provides shared helper functions used across the
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use vult::ast::{Expr, ExprKind, NamedId, Stmt, StmtKind};
use vult::parser::{ParseError, parse_string};

/// Parses input expected to succeed and returns the top-level blocks.
pub fn parse_ok(input: &str) -> Vec<Stmt> {
    match parse_string(input).outcome {
        Ok(blocks) => blocks,
        Err(errors) => panic!("Failed to parse input {:?}: {:?}", input, errors),
    }
}

/// Parses input expected to fail and returns the collected errors.
pub fn parse_err(input: &str) -> Vec<ParseError> {
    match parse_string(input).outcome {
        Ok(blocks) => panic!(
            "Expected parsing to fail for input {:?}, but it produced {} blocks",
            input,
            blocks.len()
        ),
        Err(errors) => errors,
    }
}

/// Parses input expected to hold exactly one statement and unwraps it
/// from its surrounding block.
pub fn single_stmt(input: &str) -> Stmt {
    let blocks = parse_ok(input);
    assert_eq!(
        blocks.len(),
        1,
        "Input {:?} produced {} blocks",
        input,
        blocks.len()
    );
    let first = blocks.into_iter().next().unwrap();
    match first.kind {
        StmtKind::Block { body, .. } if body.len() == 1 => body.into_iter().next().unwrap(),
        _ => first,
    }
}

/// Checks that every node in a parsed statement carries a usable
/// location: a non-empty file name and a start not after its end. Only
/// the empty statement and expression, which exist purely as error
/// placeholders, are exempt.
pub fn assert_stmt_locations(stmt: &Stmt) {
    if matches!(stmt.kind, StmtKind::Empty) {
        return;
    }
    assert!(
        !stmt.span.file.is_empty(),
        "Statement without a file name: {:?}",
        stmt.kind
    );
    assert!(
        stmt.span.start.offset <= stmt.span.end.offset,
        "Statement span start after end: {:?}",
        stmt.span
    );

    match &stmt.kind {
        StmtKind::Val { lhs, rhs } => {
            assert_expr_locations(lhs);
            if let Some(rhs) = rhs {
                assert_expr_locations(rhs);
            }
        }
        StmtKind::Mem { lhs, init, rhs } => {
            assert_expr_locations(lhs);
            if let Some(init) = init {
                assert_expr_locations(init);
            }
            if let Some(rhs) = rhs {
                assert_expr_locations(rhs);
            }
        }
        StmtKind::Table { elements, .. } => {
            for element in elements {
                assert_expr_locations(element);
            }
        }
        StmtKind::Return(value) => assert_expr_locations(value),
        StmtKind::Bind { lhs, rhs } => {
            assert_expr_locations(lhs);
            assert_expr_locations(rhs);
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            assert_expr_locations(condition);
            assert_stmt_locations(then_branch);
            if let Some(else_branch) = else_branch {
                assert_stmt_locations(else_branch);
            }
        }
        StmtKind::Fun {
            params,
            body,
            return_type,
            ..
        } => {
            for param in params {
                assert_named_id_locations(param);
            }
            if let Some(return_type) = return_type {
                assert_expr_locations(return_type);
            }
            assert_stmt_locations(body);
        }
        StmtKind::While { condition, body } => {
            assert_expr_locations(condition);
            assert_stmt_locations(body);
        }
        StmtKind::Type {
            params, members, ..
        } => {
            for param in params {
                assert_named_id_locations(param);
            }
            for member in members {
                assert!(!member.span.is_unknown());
                assert_expr_locations(&member.ty);
            }
        }
        StmtKind::AliasType { params, alias, .. } => {
            for param in params {
                assert_named_id_locations(param);
            }
            assert_expr_locations(alias);
        }
        StmtKind::Block { body, .. } => {
            for stmt in body {
                assert_stmt_locations(stmt);
            }
        }
        StmtKind::Empty => {}
    }
}

/// Expression half of the location walker.
pub fn assert_expr_locations(expr: &Expr) {
    if matches!(expr.kind, ExprKind::Empty) {
        return;
    }
    assert!(
        !expr.span.file.is_empty(),
        "Expression without a file name: {:?}",
        expr.kind
    );
    assert!(
        expr.span.start.offset <= expr.span.end.offset,
        "Expression span start after end: {:?}",
        expr.span
    );

    match &expr.kind {
        ExprKind::Unit
        | ExprKind::Int(_)
        | ExprKind::Real(_)
        | ExprKind::Bool(_)
        | ExprKind::Empty => {}
        ExprKind::Id { ty, .. } => {
            if let Some(ty) = ty {
                assert_expr_locations(ty);
            }
        }
        ExprKind::UnOp { operand, .. } => assert_expr_locations(operand),
        ExprKind::BinOp { left, right, .. } => {
            assert_expr_locations(left);
            assert_expr_locations(right);
        }
        ExprKind::Call { args, .. } => {
            for arg in args {
                assert_expr_locations(arg);
            }
        }
        ExprKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            assert_expr_locations(condition);
            assert_expr_locations(then_branch);
            assert_expr_locations(else_branch);
        }
        ExprKind::Group(inner) => assert_expr_locations(inner),
        ExprKind::Tuple(elements) => {
            for element in elements {
                assert_expr_locations(element);
            }
        }
        ExprKind::Seq { body, .. } => {
            for stmt in body {
                assert_stmt_locations(stmt);
            }
        }
        ExprKind::Typed { value, ty } => {
            assert_expr_locations(value);
            assert_expr_locations(ty);
        }
    }
}

fn assert_named_id_locations(param: &NamedId) {
    match param {
        NamedId::Simple { span, .. } => assert!(!span.is_unknown()),
        NamedId::Typed { ty, span, .. } => {
            assert!(!span.is_unknown());
            assert_expr_locations(ty);
        }
    }
}
