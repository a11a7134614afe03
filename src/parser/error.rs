//! Parse error type.

use crate::token::Span;

/// An error raised while parsing a token stream into an AST.
///
/// `SyntaxError` in the error taxonomy: the first syntax error aborts
/// parsing rather than attempting recovery.
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.span.line, self.span.column, self.message)
    }
}

impl std::error::Error for ParseError {}
