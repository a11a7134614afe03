//! Lexical analyzer for the Greek programming language.
//!
//! Converts a source file's bytes into a stream of [`Token`]s. The lexer is
//! pull-based: [`Lexer::next_token`] produces one token per call, reusing the
//! same [`Source`](crate::source::Source) cursor the parser eventually
//! drives indirectly.
//!
//! # Algorithm (per call to `next_token`)
//!
//! 1. Skip spaces and tabs.
//! 2. A newline yields [`TokenKind::Newline`] and bumps the line counter.
//! 3. A letter or underscore scans a maximal identifier run, resolved
//!    against the keyword/boolean-literal table.
//! 4. A digit scans an integer, or a float if a `.` is followed by a digit.
//!    Underscores inside digit runs are permitted and ignored.
//! 5. `"` or `'` scans a string literal up to the matching quote.
//! 6. `#` scans a comment to end of line.
//! 7. Otherwise the longest matching punctuation/operator token is taken;
//!    no match is a [`LexError`].
//!
//! # Module structure
//!
//! - [`error`] - [`LexError`]
//! - `cursor` - byte navigation built on [`crate::source::Source`]
//! - `skip` - whitespace skipping
//! - `tokens` - identifier/literal/punctuation recognition

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::source::Source;
use crate::token::{Span, Token, TokenKind};

/// Scans one Greek source file into tokens.
///
/// The `'a` lifetime ties the lexer to the source text it was built from.
pub struct Lexer<'a> {
    input: &'a str,
    source: Source<'a>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            source: Source::new(input.as_bytes()),
            line: 1,
            column: 1,
        }
    }

    /// Produces the next token. Always returns `Eof` once input is exhausted,
    /// and will keep returning it on subsequent calls.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_spaces_and_tabs();

        let start_pos = self.byte_pos();
        let start_line = self.line;
        let start_column = self.column;

        match self.current_byte() {
            None => Ok(Token::new(
                TokenKind::Eof,
                Span::new(start_pos, start_pos, start_line, start_column),
            )),
            Some(b'\n') => {
                self.advance();
                Ok(Token::new(
                    TokenKind::Newline,
                    Span::new(start_pos, self.byte_pos(), start_line, start_column),
                ))
            }
            Some(b'#') => Ok(self.read_comment(start_pos, start_line, start_column)),
            Some(_) => self.read_token(),
        }
    }

    /// `#` to end of line (exclusive); the newline itself is left for the
    /// next call to `next_token`.
    fn read_comment(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // '#'
        let text_start = self.byte_pos();
        while !matches!(self.current_byte(), None | Some(b'\n')) {
            self.advance();
        }
        let text = self.input[text_start..self.byte_pos()].to_string();
        Token::new(
            TokenKind::Comment(text),
            Span::new(start_pos, self.byte_pos(), start_line, start_column),
        )
    }

    /// Convenience wrapper that drives `next_token` to completion, collecting
    /// every token (including the trailing `Eof`) into a vector.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}
