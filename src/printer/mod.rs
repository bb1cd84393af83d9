//! Renders the AST back to readable Vult text.
//!
//! The output is meant for humans: dump commands, tests, and the
//! parser's own diagnostics (a malformed binding quotes its printed
//! left-hand side). Operations are fully parenthesized so the grouping
//! chosen by the parser is visible.

use crate::ast::{Expr, ExprKind, FunAttribute, Identifier, NamedId, Stmt, StmtKind};

/// Renders a single expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::new();
    printer.expr(expr);
    printer.out
}

/// Renders a single statement, with nested blocks indented.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::new();
    printer.stmt(stmt);
    printer.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Printer {
            out: String::new(),
            indent: 0,
        }
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    fn name(&mut self, name: &Identifier) {
        self.push(&name.join("."));
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Unit => self.push("()"),
            ExprKind::Int(value) => self.push(&value.to_string()),
            ExprKind::Real(value) => self.push(&format!("{:?}", value)),
            ExprKind::Bool(value) => self.push(if *value { "true" } else { "false" }),
            ExprKind::Id { name, ty } => {
                self.name(name);
                if let Some(ty) = ty {
                    self.push(":");
                    self.expr(ty);
                }
            }
            ExprKind::UnOp { op, operand } => {
                self.push("(");
                self.push(op);
                self.expr(operand);
                self.push(")");
            }
            ExprKind::BinOp { op, left, right } => {
                self.push("(");
                self.expr(left);
                self.push(op);
                self.expr(right);
                self.push(")");
            }
            ExprKind::Call {
                instance,
                name,
                args,
                ..
            } => {
                if let Some(instance) = instance {
                    self.name(instance);
                    self.push(":");
                }
                self.name(name);
                self.push("(");
                self.expr_list(args);
                self.push(")");
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.push("if ");
                self.expr(condition);
                self.push(" then ");
                self.expr(then_branch);
                self.push(" else ");
                self.expr(else_branch);
            }
            ExprKind::Group(inner) => {
                self.push("(");
                self.expr(inner);
                self.push(")");
            }
            ExprKind::Tuple(elements) => self.expr_list(elements),
            ExprKind::Seq { body, .. } => {
                self.push("{|");
                for stmt in body {
                    self.push(" ");
                    self.stmt(stmt);
                }
                self.push(" |}");
            }
            ExprKind::Typed { value, ty } => {
                self.push("(");
                self.expr(value);
                self.push(":");
                self.expr(ty);
                self.push(")");
            }
            ExprKind::Empty => {}
        }
    }

    fn expr_list(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.push(",");
            }
            self.expr(expr);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Val { lhs, rhs } => {
                self.push("val ");
                self.expr(lhs);
                if let Some(rhs) = rhs {
                    self.push(" = ");
                    self.expr(rhs);
                }
                self.push(";");
            }
            StmtKind::Mem { lhs, init, rhs } => {
                self.push("mem ");
                self.expr(lhs);
                if let Some(init) = init {
                    self.push(" @ ");
                    self.expr(init);
                }
                if let Some(rhs) = rhs {
                    self.push(" = ");
                    self.expr(rhs);
                }
                self.push(";");
            }
            StmtKind::Table { name, elements } => {
                self.push("table ");
                self.name(name);
                self.push(" = [|");
                self.expr_list(elements);
                self.push("|];");
            }
            StmtKind::Return(value) => {
                self.push("return ");
                self.expr(value);
                self.push(";");
            }
            StmtKind::Bind { lhs, rhs } => {
                // A discarded expression statement has a unit lhs.
                if !matches!(lhs.kind, ExprKind::Unit) {
                    self.expr(lhs);
                    self.push(" = ");
                }
                self.expr(rhs);
                self.push(";");
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.push("if (");
                self.expr(condition);
                self.push(") ");
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.newline();
                    self.push("else ");
                    self.stmt(else_branch);
                }
            }
            StmtKind::Fun {
                name,
                params,
                body,
                return_type,
                attributes,
            } => {
                if attributes.contains(&FunAttribute::JoinFunction) {
                    self.push("and ");
                } else {
                    self.push("fun ");
                }
                self.name(name);
                self.push("(");
                self.params(params);
                self.push(")");
                if let Some(return_type) = return_type {
                    self.push(" : ");
                    self.expr(return_type);
                }
                self.push(" ");
                self.stmt(body);
            }
            StmtKind::While { condition, body } => {
                self.push("while (");
                self.expr(condition);
                self.push(") ");
                self.stmt(body);
            }
            StmtKind::Type {
                name,
                params,
                members,
            } => {
                self.push("type ");
                self.name(name);
                if !params.is_empty() {
                    self.push("(");
                    self.params(params);
                    self.push(")");
                }
                self.push(" {");
                self.indent += 1;
                for member in members {
                    self.newline();
                    self.push("val ");
                    self.name(&member.name);
                    self.push(" : ");
                    self.expr(&member.ty);
                    self.push(";");
                }
                self.indent -= 1;
                self.newline();
                self.push("}");
            }
            StmtKind::AliasType {
                name,
                params,
                alias,
            } => {
                self.push("type ");
                self.name(name);
                if !params.is_empty() {
                    self.push("(");
                    self.params(params);
                    self.push(")");
                }
                self.push(" : ");
                self.expr(alias);
                self.push(";");
            }
            StmtKind::Block { body, .. } => {
                self.push("{");
                self.indent += 1;
                for stmt in body {
                    self.newline();
                    self.stmt(stmt);
                }
                self.indent -= 1;
                self.newline();
                self.push("}");
            }
            StmtKind::Empty => {}
        }
    }

    fn params(&mut self, params: &[NamedId]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.push(",");
            }
            match param {
                NamedId::Simple { name, .. } => self.name(name),
                NamedId::Typed { name, ty, .. } => {
                    self.name(name);
                    self.push(":");
                    self.expr(ty);
                }
            }
        }
    }
}
