//! Whitespace skipping for the lexer.
//!
//! Only spaces and tabs are skipped silently; newlines are significant
//! (they produce [`crate::token::TokenKind::Newline`]) and comments produce
//! their own token.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive spaces and tabs (but not newlines).
    pub(super) fn skip_spaces_and_tabs(&mut self) {
        while matches!(self.current_byte(), Some(b' ') | Some(b'\t') | Some(b'\r')) {
            self.advance();
        }
    }
}
