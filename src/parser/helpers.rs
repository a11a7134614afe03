//! Token navigation helpers shared by the grammar routines.

use super::error::ParseError;
use super::Parser;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Identifier(s) => format!("identifier '{s}'"),
            TokenKind::StringLiteral(s) => format!("string {s:?}"),
            TokenKind::IntLiteral(n) => format!("integer '{n}'"),
            TokenKind::FloatLiteral(n) => format!("float '{n}'"),
            TokenKind::BoolLiteral(b) => format!("bool '{b}'"),
            TokenKind::Newline => "newline".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("'{other:?}'"),
        }
    }

    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    pub(super) fn current_line(&self) -> usize {
        self.current().span.line
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Skips `Newline` tokens unconditionally, and `Comment` tokens as long
    /// as we are not at the top level (top-level comments are preserved as
    /// decorative AST nodes by the caller instead).
    pub(super) fn skip_trivia(&mut self) {
        loop {
            match self.current_kind() {
                TokenKind::Newline => self.advance(),
                TokenKind::Comment(_) => self.advance(),
                _ => break,
            }
        }
    }

    pub(super) fn skip_newlines(&mut self) {
        while matches!(self.current_kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<Span, ParseError> {
        if self.check(expected) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::new(
                format!(
                    "expected {}, found {}",
                    Self::token_kind_display(expected),
                    Self::token_kind_display(self.current_kind())
                ),
                self.current_span(),
            ))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::new(
                format!("expected identifier, found {}", Self::token_kind_display(self.current_kind())),
                self.current_span(),
            ))
        }
    }

    /// Consumes a single `Newline`-or-`Comment` trivia run then matches
    /// against `kind`, used by callers that need to peek past trivia
    /// without unconditionally eating it (e.g. distinguishing `if`/`else`).
    pub(super) fn check_after_trivia(&self, kind: &TokenKind) -> bool {
        let mut i = self.pos;
        while matches!(
            self.tokens.get(i).map(|t| &t.kind),
            Some(TokenKind::Newline) | Some(TokenKind::Comment(_))
        ) {
            i += 1;
        }
        self.tokens.get(i).map(|t| &t.kind) == Some(kind)
    }
}
