//! Statement and body parsing.

use super::error::ParseError;
use super::Parser;
use crate::ast::{AssignOp, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// `body := '{' statement* '}'`
    pub(super) fn parse_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut stmts = Vec::new();
        loop {
            self.skip_trivia();
            if self.check(&TokenKind::RightBrace) || self.is_eof() {
                break;
            }
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::If => {
                self.advance();
                let condition = self.parse_condition()?;
                let body = self.parse_body()?;
                Ok(Stmt::new(StmtKind::If { condition, body }, span))
            }
            TokenKind::Else => {
                self.advance();
                let body = self.parse_body()?;
                Ok(Stmt::new(StmtKind::Else { body }, span))
            }
            TokenKind::While => {
                self.advance();
                let condition = self.parse_condition()?;
                let body = self.parse_body()?;
                Ok(Stmt::new(StmtKind::While { condition, body }, span))
            }
            TokenKind::Return => {
                self.advance();
                if self.starts_expr() {
                    let value = self.parse_expr()?;
                    Ok(Stmt::new(StmtKind::Return(Some(value)), span))
                } else {
                    Ok(Stmt::new(StmtKind::Return(None), span))
                }
            }
            _ => self.parse_expr_or_assignment(),
        }
    }

    fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        self.advance();
        let name = self.expect_identifier()?;
        let ty = if self.check(&TokenKind::Colon) {
            self.advance();
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(&TokenKind::Equals)?;
        let value = self.parse_expr()?;
        Ok(Stmt::new(StmtKind::Let { name, ty, value }, span))
    }

    fn parse_expr_or_assignment(&mut self) -> Result<Stmt, ParseError> {
        let span = self.current_span();
        let target = self.parse_expr()?;
        let op = match self.current_kind() {
            TokenKind::Equals => Some(AssignOp::Assign),
            TokenKind::PlusEqual => Some(AssignOp::AddAssign),
            TokenKind::MinusEqual => Some(AssignOp::SubAssign),
            TokenKind::StarEqual => Some(AssignOp::MulAssign),
            TokenKind::SlashEqual => Some(AssignOp::DivAssign),
            TokenKind::PercentEqual => Some(AssignOp::ModAssign),
            TokenKind::AmpEqual => Some(AssignOp::AndAssign),
            TokenKind::PipeEqual => Some(AssignOp::OrAssign),
            TokenKind::CaretEqual => Some(AssignOp::XorAssign),
            _ => None,
        };
        match op {
            Some(op) => {
                self.advance();
                let value = self.parse_expr()?;
                Ok(Stmt::new(StmtKind::Assignment { target, op, value }, span))
            }
            None => Ok(Stmt::new(StmtKind::Expr(target), span)),
        }
    }

    /// Whether the current token can begin an expression - used to decide
    /// whether a bare `return` has a trailing value.
    fn starts_expr(&self) -> bool {
        !matches!(
            self.current_kind(),
            TokenKind::RightBrace | TokenKind::Newline | TokenKind::Eof
        )
    }
}
