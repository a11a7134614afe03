//! Checker error taxonomy.

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Every error the checker (or a stage it drives recursively, lexing and
/// parsing an imported file) can raise. The first one aborts checking.
#[derive(Debug)]
pub enum CheckError {
    Lex(LexError),
    Syntax(ParseError),
    Name { line: usize, message: String },
    Type { line: usize, message: String },
    Recursion { line: usize, message: String },
    Value { line: usize, message: String },
    NotImplemented { line: usize, message: String },
    /// Reading an imported module's source from disk failed.
    Io { message: String },
}

impl CheckError {
    pub fn name(line: usize, message: impl Into<String>) -> Self {
        CheckError::Name { line, message: message.into() }
    }

    pub fn ty(line: usize, message: impl Into<String>) -> Self {
        CheckError::Type { line, message: message.into() }
    }

    pub fn recursion(line: usize, message: impl Into<String>) -> Self {
        CheckError::Recursion { line, message: message.into() }
    }

    pub fn value(line: usize, message: impl Into<String>) -> Self {
        CheckError::Value { line, message: message.into() }
    }

    pub fn not_implemented(line: usize, message: impl Into<String>) -> Self {
        CheckError::NotImplemented { line, message: message.into() }
    }
}

impl From<LexError> for CheckError {
    fn from(e: LexError) -> Self {
        CheckError::Lex(e)
    }
}

impl From<ParseError> for CheckError {
    fn from(e: ParseError) -> Self {
        CheckError::Syntax(e)
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::Lex(e) => write!(f, "{e}"),
            CheckError::Syntax(e) => write!(f, "{e}"),
            CheckError::Name { line, message } => write!(f, "{line}: NameError: {message}"),
            CheckError::Type { line, message } => write!(f, "{line}: TypeError: {message}"),
            CheckError::Recursion { line, message } => write!(f, "{line}: RecursionError: {message}"),
            CheckError::Value { line, message } => write!(f, "{line}: ValueError: {message}"),
            CheckError::NotImplemented { line, message } => {
                write!(f, "{line}: NotImplementedError: {message}")
            }
            CheckError::Io { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CheckError {}
