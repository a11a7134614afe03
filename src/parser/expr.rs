//! Expression parsing: precedence tiers from loose to tight are comparison,
//! additive, multiplicative, unary, postfix.

use super::error::ParseError;
use super::Parser;
use crate::ast::{BinaryOp, Expr, ExprKind, Literal};
use crate::token::TokenKind;

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_comparison()
    }

    /// Parses an `if`/`while` condition: a bare `NAME` immediately followed
    /// by `{` leaves the `{` for `parse_body` instead of being read as a
    /// struct literal, matching the original's terminator-set treatment of
    /// `LeftBrace` in a condition position.
    pub(super) fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let previous = self.suppress_struct_literal;
        self.suppress_struct_literal = true;
        let result = self.parse_expr();
        self.suppress_struct_literal = previous;
        result
    }

    /// Runs `f` with struct-literal suppression cleared. Used at every
    /// bracketed sub-expression (parens, call/index arguments, array and
    /// struct-literal field values) so suppression from an enclosing
    /// condition doesn't leak into a context where `{` can't be a body.
    fn allowing_struct_literal<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let previous = self.suppress_struct_literal;
        self.suppress_struct_literal = false;
        let result = f(self);
        self.suppress_struct_literal = previous;
        result
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::EqualEqual => BinaryOp::Eq,
                TokenKind::BangEqual => BinaryOp::NotEq,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEq,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEq,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_additive()?;
            left = Expr::new(
                ExprKind::BinaryOperation {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::new(
                ExprKind::BinaryOperation {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                TokenKind::Amp => BinaryOp::BitAnd,
                TokenKind::Pipe => BinaryOp::BitOr,
                TokenKind::Caret => BinaryOp::BitXor,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::new(
                ExprKind::BinaryOperation {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Bang) {
            let span = self.current_span();
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Expr::new(ExprKind::Not(Box::new(inner)), span));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let name = self.expect_identifier()?;
                    let span = expr.span;
                    expr = Expr::new(
                        ExprKind::Dot {
                            head: Box::new(expr),
                            name,
                        },
                        span,
                    );
                }
                TokenKind::LeftBracket => {
                    self.advance();
                    let args = self.allowing_struct_literal(|p| {
                        let mut args = vec![p.parse_expr()?];
                        while p.check(&TokenKind::Comma) {
                            p.advance();
                            args.push(p.parse_expr()?);
                        }
                        Ok(args)
                    })?;
                    self.expect(&TokenKind::RightBracket)?;
                    let span = expr.span;
                    expr = Expr::new(
                        ExprKind::Item {
                            head: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LeftParen => {
                    // Only legal when the head is a Name or a Dot.
                    if !matches!(expr.kind, ExprKind::Name(_) | ExprKind::Dot { .. }) {
                        break;
                    }
                    self.advance();
                    let args = self.allowing_struct_literal(|p| {
                        let mut args = Vec::new();
                        if !p.check(&TokenKind::RightParen) {
                            args.push(p.parse_expr()?);
                            while p.check(&TokenKind::Comma) {
                                p.advance();
                                args.push(p.parse_expr()?);
                            }
                        }
                        Ok(args)
                    })?;
                    self.expect(&TokenKind::RightParen)?;
                    let span = expr.span;
                    expr = Expr::new(ExprKind::call(expr, args), span);
                }
                TokenKind::LeftBrace if matches!(expr.kind, ExprKind::Name(_)) && !self.suppress_struct_literal => {
                    // `NAME { fields }` - a struct literal.
                    let name = match &expr.kind {
                        ExprKind::Name(n) => n.clone(),
                        _ => unreachable!(),
                    };
                    let span = expr.span;
                    self.advance();
                    let fields = self.parse_struct_fields()?;
                    self.expect(&TokenKind::RightBrace)?;
                    expr = Expr::new(
                        ExprKind::Struct {
                            ty: crate::ast::TypeExpr::name(name),
                            fields,
                        },
                        span,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    /// Struct literal fields: either `name: value` pairs or positional
    /// values assigned to members in declaration order (positional fields
    /// are recorded under their numeric index as a string; the checker maps
    /// them onto the struct's member order).
    fn parse_struct_fields(&mut self) -> Result<Vec<(String, Expr)>, ParseError> {
        let mut fields = Vec::new();
        if self.check(&TokenKind::RightBrace) {
            return Ok(fields);
        }
        loop {
            let name = if let TokenKind::Identifier(name) = self.current_kind().clone() {
                if self.tokens.get(self.pos + 1).map(|t| &t.kind) == Some(&TokenKind::Colon) {
                    self.advance();
                    self.advance();
                    name
                } else {
                    fields.len().to_string()
                }
            } else {
                fields.len().to_string()
            };
            let value = self.allowing_struct_literal(|p| p.parse_expr())?;
            fields.push((name, value));
            if self.check(&TokenKind::Comma) {
                self.advance();
                self.skip_newlines();
                if self.check(&TokenKind::RightBrace) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(fields)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::IntLiteral(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Int(n)), span))
            }
            TokenKind::FloatLiteral(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Float(n)), span))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Str(s)), span))
            }
            TokenKind::BoolLiteral(b) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Literal::Bool(b)), span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Name(name), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.allowing_struct_literal(|p| p.parse_expr())?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::new(ExprKind::Parenthesized(Box::new(inner)), span))
            }
            TokenKind::LeftBracket => {
                self.advance();
                let values = self.allowing_struct_literal(|p| {
                    let mut values = Vec::new();
                    if !p.check(&TokenKind::RightBracket) {
                        values.push(p.parse_expr()?);
                        while p.check(&TokenKind::Comma) {
                            p.advance();
                            values.push(p.parse_expr()?);
                        }
                    }
                    Ok(values)
                })?;
                self.expect(&TokenKind::RightBracket)?;
                Ok(Expr::new(ExprKind::Array(values), span))
            }
            other => Err(ParseError::new(
                format!("expected an expression, found {}", Self::token_kind_display(&other)),
                span,
            )),
        }
    }
}
