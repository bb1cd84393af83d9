//! Statement parsing and error recovery.
//!
//! Statements are parsed by recursive descent, dispatching on the
//! current token. A statement that fails to parse is replaced by an
//! empty statement and the stream is resynchronized at the next
//! statement boundary, so one malformed construct never takes the rest
//! of the file down with it.

use super::Parser;
use super::error::ParseError;
use super::expr::{RBP_ELEMENT, RBP_TYPE};
use crate::ast::{
    Expr, ExprKind, FunAttribute, Identifier, NamedId, Stmt, StmtKind, ValDecl,
    identifier_from_lexeme,
};
use crate::printer;
use crate::token::{Span, TokenKind};

impl<'a> Parser<'a> {
    /// Parses one statement, recovering from errors.
    ///
    /// On a parse error the error is recorded, the stream skips ahead
    /// to the next statement boundary, and an empty statement takes the
    /// failed statement's place. Expression-level errors propagate up
    /// to this point and no further.
    pub fn statement(&mut self) -> Stmt {
        match self.statement_inner() {
            Ok(stmt) => stmt,
            Err(error) => {
                self.stream.append_error(error);
                self.move_to_next_statement();
                Stmt::new(StmtKind::Empty, Span::unknown())
            }
        }
    }

    /// Dispatches on the current token to the statement productions.
    fn statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.stream.peek_kind() {
            TokenKind::Val => self.val_statement(),
            TokenKind::Mem => self.mem_statement(),
            TokenKind::Return => self.return_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::Fun | TokenKind::And => self.function_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Type => self.type_statement(),
            TokenKind::Table => self.table_statement(),
            _ => self.bind_statement(),
        }
    }

    /// Skips tokens until a statement boundary.
    ///
    /// A `;` or `}` is consumed (it ends the broken statement); a
    /// keyword that starts a new statement is left in place; the end of
    /// file always stops the search.
    fn move_to_next_statement(&mut self) {
        loop {
            match self.stream.peek_kind() {
                TokenKind::Semicolon => {
                    self.stream.advance();
                    return;
                }
                TokenKind::Eof => return,
                TokenKind::Fun | TokenKind::Val | TokenKind::If | TokenKind::Return => return,
                TokenKind::RightBrace => {
                    self.stream.advance();
                    return;
                }
                _ => self.stream.advance(),
            }
        }
    }

    /// `val <lhs> [= <rhs>] ;`
    ///
    /// The left-hand side is a full expression (it may be a tuple or a
    /// type-ascribed name); whether it is a valid binding target is for
    /// later passes to decide.
    fn val_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let lhs = self.expression(0)?;
        let rhs = if self.stream.opt_consume(TokenKind::Equal) {
            Some(self.expression(0)?)
        } else {
            None
        };
        self.stream.consume(TokenKind::Semicolon)?;
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(StmtKind::Val { lhs, rhs }, span))
    }

    /// `mem <lhs> [@ <init>] [= <rhs>] ;`
    fn mem_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let lhs = self.expression(0)?;
        let init = if self.stream.opt_consume(TokenKind::At) {
            Some(self.expression(0)?)
        } else {
            None
        };
        let rhs = if self.stream.opt_consume(TokenKind::Equal) {
            Some(self.expression(0)?)
        } else {
            None
        };
        self.stream.consume(TokenKind::Semicolon)?;
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(StmtKind::Mem { lhs, init, rhs }, span))
    }

    /// `return <exp> ;`
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let value = self.expression(0)?;
        self.stream.consume(TokenKind::Semicolon)?;
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// `if ( <cond> ) <stmts> [else <stmts>]`
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        self.stream.consume(TokenKind::LeftParen)?;
        let condition = self.expression(0)?;
        self.stream.consume(TokenKind::RightParen)?;
        let then_branch = self.stmt_list()?;
        let else_branch = if self.stream.opt_consume(TokenKind::Else) {
            Some(Box::new(self.stmt_list()?))
        } else {
            None
        };
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch,
            },
            span,
        ))
    }

    /// `while ( <cond> ) <stmts>`
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        self.stream.consume(TokenKind::LeftParen)?;
        let condition = self.expression(0)?;
        self.stream.consume(TokenKind::RightParen)?;
        let body = self.stmt_list()?;
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        ))
    }

    /// `fun <name> ( [params] ) [: <type>] <stmts>`, or the same with
    /// `and`, which joins the function to the previous one's state.
    ///
    /// The statement's location starts at the name, not the keyword.
    fn function_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let attributes = if keyword.kind == TokenKind::And {
            vec![FunAttribute::JoinFunction]
        } else {
            Vec::new()
        };
        let (name, name_span) = self.identifier()?;
        self.stream.consume(TokenKind::LeftParen)?;
        let params = self.named_id_list()?;
        self.stream.consume(TokenKind::RightParen)?;
        let return_type = if self.stream.opt_consume(TokenKind::Colon) {
            Some(self.expression(0)?)
        } else {
            None
        };
        let body = self.stmt_list()?;
        let span = name_span.merge(self.stream.prev_span());
        Ok(Stmt::new(
            StmtKind::Fun {
                name,
                params,
                body: Box::new(body),
                return_type,
                attributes,
            },
            span,
        ))
    }

    /// `type <name> [( params )]` followed by either `: <alias> [;]` or
    /// `{ <val-decls> }`.
    fn type_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let (name, _) = self.identifier()?;
        let params = if self.stream.opt_consume(TokenKind::LeftParen) {
            let params = self.named_id_list()?;
            self.stream.consume(TokenKind::RightParen)?;
            params
        } else {
            Vec::new()
        };
        match self.stream.peek_kind() {
            TokenKind::Colon => {
                self.stream.advance();
                let alias = self.expression(RBP_TYPE)?;
                self.stream.opt_consume(TokenKind::Semicolon);
                let span = keyword.span.merge(self.stream.prev_span());
                Ok(Stmt::new(
                    StmtKind::AliasType {
                        name,
                        params,
                        alias,
                    },
                    span,
                ))
            }
            TokenKind::LeftBrace => {
                self.stream.advance();
                let mut members = Vec::new();
                loop {
                    match self.stream.peek_kind() {
                        TokenKind::RightBrace => {
                            self.stream.advance();
                            break;
                        }
                        TokenKind::Eof => {
                            self.stream.expect(TokenKind::RightBrace)?;
                        }
                        _ => {
                            members.push(self.val_decl()?);
                            self.stream.consume(TokenKind::Semicolon)?;
                        }
                    }
                }
                let span = keyword.span.merge(self.stream.prev_span());
                Ok(Stmt::new(
                    StmtKind::Type {
                        name,
                        params,
                        members,
                    },
                    span,
                ))
            }
            _ => Err(ParseError::expected_type_body(
                self.stream.peek(),
                self.stream.error_point(),
            )),
        }
    }

    /// `val <name> : <type>` inside a type declaration body.
    fn val_decl(&mut self) -> Result<ValDecl, ParseError> {
        self.stream.consume(TokenKind::Val)?;
        let (name, name_span) = self.identifier()?;
        self.stream.consume(TokenKind::Colon)?;
        let ty = self.expression(RBP_TYPE)?;
        let span = name_span.merge(&ty.span);
        Ok(ValDecl { name, ty, span })
    }

    /// `table <name> = [| <elements> |] ;`
    fn table_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.stream.take();
        let (name, _) = self.identifier()?;
        self.stream.consume(TokenKind::Equal)?;
        self.stream.consume(TokenKind::LeftArray)?;
        let elements = self.expression_list()?;
        self.stream.consume(TokenKind::RightArray)?;
        self.stream.consume(TokenKind::Semicolon)?;
        let span = keyword.span.merge(self.stream.prev_span());
        Ok(Stmt::new(StmtKind::Table { name, elements }, span))
    }

    /// The fallback statement: `<lhs> = <rhs> ;`, or a bare
    /// expression statement `<exp> ;` whose result is discarded.
    fn bind_statement(&mut self) -> Result<Stmt, ParseError> {
        let lhs = self.expression(0)?;
        match self.stream.peek_kind() {
            TokenKind::Equal => {
                self.stream.advance();
                let rhs = self.expression(0)?;
                self.stream.consume(TokenKind::Semicolon)?;
                let span = lhs.span.merge(self.stream.prev_span());
                Ok(Stmt::new(StmtKind::Bind { lhs, rhs }, span))
            }
            TokenKind::Semicolon => {
                self.stream.advance();
                let span = lhs.span.merge(self.stream.prev_span());
                let unit = Expr::new(ExprKind::Unit, lhs.span.clone());
                Ok(Stmt::new(StmtKind::Bind { lhs: unit, rhs: lhs }, span))
            }
            _ => Err(ParseError::binding_missing_equal(
                &printer::print_expr(&lhs),
                self.stream.peek(),
                self.stream.error_point(),
            )),
        }
    }

    /// A statement block `{ ... }`, or a single statement wrapped in a
    /// block. The single-statement form is what makes bodies like
    /// `if (x) return y;` work.
    ///
    /// # Errors
    ///
    /// An unclosed `{` reaching the end of the file. Errors inside the
    /// block have already been recovered statement by statement.
    pub fn stmt_list(&mut self) -> Result<Stmt, ParseError> {
        if self.stream.peek_kind() == TokenKind::LeftBrace {
            let open = self.stream.take();
            let mut body = Vec::new();
            loop {
                match self.stream.peek_kind() {
                    TokenKind::RightBrace => {
                        self.stream.advance();
                        break;
                    }
                    TokenKind::Eof => {
                        self.stream.expect(TokenKind::RightBrace)?;
                    }
                    _ => body.push(self.statement()),
                }
            }
            let span = open.span.merge(self.stream.prev_span());
            Ok(Stmt::new(
                StmtKind::Block {
                    instance: None,
                    body,
                },
                span,
            ))
        } else {
            let stmt = self.statement();
            let span = stmt.span.clone();
            Ok(Stmt::new(
                StmtKind::Block {
                    instance: None,
                    body: vec![stmt],
                },
                span,
            ))
        }
    }

    /// Consumes an identifier token and splits it into segments.
    fn identifier(&mut self) -> Result<(Identifier, Span), ParseError> {
        self.stream.expect(TokenKind::Identifier)?;
        let token = self.stream.take();
        Ok((identifier_from_lexeme(&token.value), token.span))
    }

    /// A comma-separated parameter list, possibly empty. Empty is
    /// detected by the next token not being a name.
    fn named_id_list(&mut self) -> Result<Vec<NamedId>, ParseError> {
        let mut params = Vec::new();
        if self.stream.peek_kind() != TokenKind::Identifier {
            return Ok(params);
        }
        params.push(self.named_id()?);
        while self.stream.opt_consume(TokenKind::Comma) {
            params.push(self.named_id()?);
        }
        Ok(params)
    }

    /// One parameter: a name, optionally `: <type>`.
    fn named_id(&mut self) -> Result<NamedId, ParseError> {
        let (name, span) = self.identifier()?;
        if self.stream.opt_consume(TokenKind::Colon) {
            let ty = self.expression(RBP_ELEMENT)?;
            let span = span.merge(&ty.span);
            Ok(NamedId::Typed { name, ty, span })
        } else {
            Ok(NamedId::Simple { name, span })
        }
    }
}
