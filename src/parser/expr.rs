//! Expression parsing.
//!
//! Expressions are parsed with a Pratt (top-down operator precedence)
//! parser: every token has a prefix handler ([`Parser::nud`]), infix
//! tokens additionally have an infix handler ([`Parser::led`]), and a
//! binding-power comparison decides how far an operand reaches.
//!
//! Two tokens get special infix treatment: the comma assembles flat
//! tuples, and the colon attaches a type to the expression on its
//! left.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Identifier, identifier_from_lexeme};
use crate::token::{Token, TokenKind};

/// Left binding powers (higher number = tighter binding).
///
/// An infix token captures the expression on its left when its left
/// binding power is above the right binding power of the context, so
/// `a + b * c` groups as `a + (b * c)` and `a - b - c` associates to
/// the left.
const LBP_COLON: u8 = 10;
const LBP_COMMA: u8 = 20;
const LBP_LOGICAL: u8 = 30;
const LBP_COMPARISON: u8 = 40;
const LBP_ADDITIVE: u8 = 50;
const LBP_MULTIPLICATIVE: u8 = 60;

/// Right binding power of unary minus. Above every infix operator, so
/// `-a * b` groups as `(-a) * b`.
const RBP_UNARY: u8 = 70;

/// Right binding power for elements of comma-separated lists and for
/// type expressions after `:`. Equal to the comma's own binding power,
/// which stops an element from swallowing the comma that follows it.
pub(super) const RBP_ELEMENT: u8 = LBP_COMMA;

/// Right binding power for type expressions in declarations, where a
/// trailing `,` or `;` belongs to the surrounding context.
pub(super) const RBP_TYPE: u8 = LBP_COLON;

/// Returns the left binding power of a token, keyed on its kind and,
/// for operators, its lexeme. Tokens that cannot appear infix have
/// binding power zero.
fn left_binding_power(token: &Token) -> u8 {
    match token.kind {
        TokenKind::Colon => LBP_COLON,
        TokenKind::Comma => LBP_COMMA,
        TokenKind::Op => match token.value.as_str() {
            "||" | "&&" => LBP_LOGICAL,
            "==" | "!=" | ">" | "<" | ">=" | "<=" => LBP_COMPARISON,
            "+" | "-" => LBP_ADDITIVE,
            "*" | "/" | "%" => LBP_MULTIPLICATIVE,
            _ => 0,
        },
        _ => 0,
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression whose operands bind at least as tightly as
    /// `rbp`.
    ///
    /// This is the Pratt driver: take a token, give it to its prefix
    /// handler, then keep folding infix tokens into the left operand
    /// for as long as they bind tighter than the context allows.
    pub(super) fn expression(&mut self, rbp: u8) -> Result<Expr, ParseError> {
        let token = self.stream.take();
        let mut left = self.nud(token)?;
        while rbp < left_binding_power(self.stream.peek()) {
            let token = self.stream.take();
            left = self.led(token, left)?;
        }
        Ok(left)
    }

    /// Prefix handler: turns `token` into the start of an expression.
    /// The token has already been consumed.
    fn nud(&mut self, token: Token) -> Result<Expr, ParseError> {
        match token.kind {
            TokenKind::Op if token.value == "-" => {
                let operand = self.expression(RBP_UNARY)?;
                let span = token.span.merge(&operand.span);
                Ok(Expr::new(
                    ExprKind::UnOp {
                        op: token.value,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::Identifier => self.nud_identifier(token),
            TokenKind::LeftParen => self.nud_group(token),
            TokenKind::Int => {
                let value = token
                    .value
                    .parse::<i64>()
                    .map_err(|_| ParseError::invalid_literal(&token))?;
                Ok(Expr::new(ExprKind::Int(value), token.span))
            }
            TokenKind::Real => {
                let value = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| ParseError::invalid_literal(&token))?;
                Ok(Expr::new(ExprKind::Real(value), token.span))
            }
            TokenKind::True => Ok(Expr::new(ExprKind::Bool(true), token.span)),
            TokenKind::False => Ok(Expr::new(ExprKind::Bool(false), token.span)),
            TokenKind::If => {
                let condition = self.expression(0)?;
                self.stream.consume(TokenKind::Then)?;
                let then_branch = self.expression(0)?;
                self.stream.consume(TokenKind::Else)?;
                let else_branch = self.expression(0)?;
                let span = token.span.merge(&else_branch.span);
                Ok(Expr::new(
                    ExprKind::If {
                        condition: Box::new(condition),
                        then_branch: Box::new(then_branch),
                        else_branch: Box::new(else_branch),
                    },
                    span,
                ))
            }
            TokenKind::LeftSeq => self.nud_seq(token),
            _ => Err(ParseError::not_expecting(&token)),
        }
    }

    /// An identifier in expression position: a call when followed by
    /// `(`, a type-ascribed name when followed by `:`, a bare name
    /// otherwise.
    fn nud_identifier(&mut self, token: Token) -> Result<Expr, ParseError> {
        let name = identifier_from_lexeme(&token.value);
        match self.stream.peek_kind() {
            TokenKind::LeftParen => self.call(name, token),
            TokenKind::Colon => {
                self.stream.advance();
                let ty = self.expression(RBP_ELEMENT)?;
                let span = token.span.merge(&ty.span);
                Ok(Expr::new(
                    ExprKind::Id {
                        name,
                        ty: Some(Box::new(ty)),
                    },
                    span,
                ))
            }
            _ => Ok(Expr::new(ExprKind::Id { name, ty: None }, token.span)),
        }
    }

    /// `(` in prefix position: the unit value `()` or a parenthesized
    /// expression.
    fn nud_group(&mut self, open: Token) -> Result<Expr, ParseError> {
        if self.stream.peek_kind() == TokenKind::RightParen {
            let close = self.stream.take();
            return Ok(Expr::new(ExprKind::Unit, open.span.merge(&close.span)));
        }
        let inner = self.expression(0)?;
        self.stream.consume(TokenKind::RightParen)?;
        let span = open.span.merge(self.stream.prev_span());
        Ok(Expr::new(ExprKind::Group(Box::new(inner)), span))
    }

    /// A statement sequence `{| ... |}` in expression position.
    fn nud_seq(&mut self, open: Token) -> Result<Expr, ParseError> {
        let mut body = Vec::new();
        loop {
            match self.stream.peek_kind() {
                TokenKind::RightSeq => {
                    self.stream.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.stream.expect(TokenKind::RightSeq)?;
                }
                _ => body.push(self.statement()),
            }
        }
        let span = open.span.merge(self.stream.prev_span());
        Ok(Expr::new(
            ExprKind::Seq {
                instance: None,
                body,
            },
            span,
        ))
    }

    /// Infix handler: folds `token` and the expression to its right
    /// into `left`. The token has already been consumed.
    fn led(&mut self, token: Token, left: Expr) -> Result<Expr, ParseError> {
        match token.kind {
            TokenKind::Op => {
                let right = self.expression(left_binding_power(&token))?;
                let span = left.span.merge(&right.span);
                Ok(Expr::new(
                    ExprKind::BinOp {
                        op: token.value,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                ))
            }
            TokenKind::Comma => self.led_tuple(left),
            TokenKind::Colon => {
                let ty = self.expression(RBP_ELEMENT)?;
                let span = left.span.merge(&ty.span);
                Ok(Expr::new(
                    ExprKind::Typed {
                        value: Box::new(left),
                        ty: Box::new(ty),
                    },
                    span,
                ))
            }
            // No other kind carries a nonzero binding power. Reaching
            // here means the power table and this dispatch fell out of
            // sync.
            _ => Err(ParseError::internal(
                format!(
                    "Internal parser error: no infix handler for {}. This is a bug in the parser, please report it.",
                    token.describe()
                ),
                token.span,
            )),
        }
    }

    /// Comma in infix position: assemble a flat tuple.
    ///
    /// Both sides are spliced so that `a, b, c` becomes one three
    /// element tuple; a tuple never directly contains another tuple.
    /// The node keeps the location of its first element.
    fn led_tuple(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let right = self.expression(RBP_ELEMENT)?;
        let span = left.span.clone();
        let mut elements = match left {
            Expr {
                kind: ExprKind::Tuple(elements),
                ..
            } => elements,
            other => vec![other],
        };
        match right {
            Expr {
                kind: ExprKind::Tuple(more),
                ..
            } => elements.extend(more),
            other => elements.push(other),
        }
        Ok(Expr::new(ExprKind::Tuple(elements), span))
    }

    /// A call `name(...)`; the name token has been consumed and the
    /// current token is the opening parenthesis.
    fn call(&mut self, name: Identifier, start: Token) -> Result<Expr, ParseError> {
        self.stream.advance();
        let args = if self.stream.peek_kind() == TokenKind::RightParen {
            Vec::new()
        } else {
            self.expression_list()?
        };
        self.stream.consume(TokenKind::RightParen)?;
        let span = start.span.merge(self.stream.prev_span());
        Ok(Expr::new(
            ExprKind::Call {
                instance: None,
                name,
                args,
                attributes: Vec::new(),
            },
            span,
        ))
    }

    /// A comma-separated list of expressions, at least one. Elements
    /// parse below the comma's binding power so the separating commas
    /// are not folded into tuples.
    pub(super) fn expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut elements = vec![self.expression(RBP_ELEMENT)?];
        while self.stream.opt_consume(TokenKind::Comma) {
            elements.push(self.expression(RBP_ELEMENT)?);
        }
        Ok(elements)
    }
}
