//! Type expression parsing: `name`, `name@inner`, `name[t1, t2, ...]`.

use super::error::ParseError;
use super::Parser;
use crate::ast::TypeExpr;
use crate::token::TokenKind;

impl Parser {
    pub(super) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let name = self.expect_identifier()?;

        if self.check(&TokenKind::At) {
            self.advance();
            let inner = self.parse_type()?;
            return Ok(TypeExpr::subtype(name, inner));
        }

        if self.check(&TokenKind::LeftBracket) {
            self.advance();
            let mut params = vec![self.parse_type()?];
            while self.check(&TokenKind::Comma) {
                self.advance();
                params.push(self.parse_type()?);
            }
            self.expect(&TokenKind::RightBracket)?;
            return Ok(TypeExpr::generic(name, params));
        }

        Ok(TypeExpr::name(name))
    }
}
