//! Top-level declaration parsing: imports, externs, functions, structs,
//! enums, and top-level `let` constants.

use super::error::ParseError;
use super::Parser;
use crate::ast::{
    EnumDeclaration, EnumMember, ExternDeclaration, FunctionDeclaration, FunctionHead,
    ImportDeclaration, LetDeclaration, Param, StructDeclaration, StructMember, TopLevel,
};
use crate::token::TokenKind;

impl Parser {
    pub(super) fn parse_top_decl(&mut self) -> Result<TopLevel, ParseError> {
        match self.current_kind() {
            TokenKind::Comment(text) => {
                let text = text.clone();
                self.advance();
                Ok(TopLevel::Comment(text))
            }
            TokenKind::Import => self.parse_import(),
            TokenKind::Extern => self.parse_extern(),
            TokenKind::Struct => self.parse_struct_decl(),
            TokenKind::Enum => self.parse_enum_decl(),
            TokenKind::Fun => Ok(TopLevel::Function(self.parse_fun_decl()?)),
            TokenKind::Let => Ok(TopLevel::Let(self.parse_top_level_let()?)),
            other => Err(ParseError::new(
                format!(
                    "expected a top-level declaration, found {}",
                    Self::token_kind_display(&other.clone())
                ),
                self.current_span(),
            )),
        }
    }

    fn parse_import(&mut self) -> Result<TopLevel, ParseError> {
        let span = self.current_span();
        self.advance();
        let mut path = self.expect_identifier()?;
        while self.check(&TokenKind::Dot) {
            self.advance();
            path.push('.');
            path.push_str(&self.expect_identifier()?);
        }
        Ok(TopLevel::Import(ImportDeclaration {
            path,
            line: span.line,
        }))
    }

    fn parse_extern(&mut self) -> Result<TopLevel, ParseError> {
        self.advance();
        self.expect(&TokenKind::Fun)?;
        let head = self.parse_fun_head()?;
        Ok(TopLevel::Extern(ExternDeclaration { head }))
    }

    pub(super) fn parse_fun_head(&mut self) -> Result<FunctionHead, ParseError> {
        let span = self.current_span();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            params.push(self.parse_param()?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                params.push(self.parse_param()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        let return_type = self.parse_type()?;
        Ok(FunctionHead::new(name, params, Some(return_type), span.line))
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let span = self.current_span();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(Param {
            name,
            ty,
            line: span.line,
        })
    }

    fn parse_fun_decl(&mut self) -> Result<FunctionDeclaration, ParseError> {
        self.advance();
        let head = self.parse_fun_head()?;
        let body = self.parse_body()?;
        Ok(FunctionDeclaration { head, body })
    }

    fn parse_struct_decl(&mut self) -> Result<TopLevel, ParseError> {
        let span = self.current_span();
        self.advance();
        let ty = self.parse_type()?;
        self.expect(&TokenKind::LeftBrace)?;
        let mut members = Vec::new();
        let mut methods = Vec::new();
        loop {
            self.skip_trivia();
            if self.check(&TokenKind::RightBrace) || self.is_eof() {
                break;
            }
            if self.check(&TokenKind::Fun) {
                methods.push(self.parse_fun_decl()?);
            } else {
                let member_span = self.current_span();
                let name = self.expect_identifier()?;
                self.expect(&TokenKind::Colon)?;
                let member_ty = self.parse_type()?;
                members.push(StructMember {
                    name,
                    ty: member_ty,
                    line: member_span.line,
                });
            }
            if self.check(&TokenKind::Comma) {
                self.advance();
            }
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(TopLevel::Struct(StructDeclaration {
            ty,
            members,
            methods,
            line: span.line,
        }))
    }

    fn parse_enum_decl(&mut self) -> Result<TopLevel, ParseError> {
        let span = self.current_span();
        self.advance();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftBrace)?;
        let mut members = Vec::new();
        loop {
            self.skip_trivia();
            if self.check(&TokenKind::RightBrace) {
                break;
            }
            let member_span = self.current_span();
            let member_name = self.expect_identifier()?;
            members.push(EnumMember {
                name: member_name,
                line: member_span.line,
            });
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.skip_trivia();
        self.expect(&TokenKind::RightBrace)?;
        Ok(TopLevel::Enum(EnumDeclaration {
            name,
            members,
            line: span.line,
        }))
    }

    fn parse_top_level_let(&mut self) -> Result<LetDeclaration, ParseError> {
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
        Ok(LetDeclaration {
            name,
            ty,
            value,
            line: span.line,
        })
    }
}
