//! Cursor navigation built on top of [`crate::source::Source`].

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the next byte without consuming it.
    pub(super) fn current_byte(&mut self) -> Option<u8> {
        self.source.peek()
    }

    /// Returns `true` once the end of input has been reached.
    pub(super) fn is_eof(&mut self) -> bool {
        self.source.is_eof()
    }

    /// Consumes one byte, updating line/column tracking.
    pub(super) fn advance(&mut self) -> Option<u8> {
        let byte = self.source.next()?;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    pub(super) fn byte_pos(&self) -> usize {
        self.source.position()
    }
}
