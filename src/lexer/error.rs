//! Lexical analysis error type.

use crate::token::Span;

/// An error raised while scanning the byte stream into tokens.
///
/// Lexing is fatal-first: the first `LexError` aborts compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_byte(byte: u8, span: Span) -> Self {
        LexError::new(format!("unexpected byte {:#04x} ('{}')", byte, byte as char), span)
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexError::new("unterminated string literal", span)
    }

    pub fn invalid_number(text: &str, span: Span) -> Self {
        LexError::new(format!("invalid numeric literal '{text}'"), span)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.span.line, self.span.column, self.message)
    }
}

impl std::error::Error for LexError {}
