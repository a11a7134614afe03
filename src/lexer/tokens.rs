//! Token recognition: identifiers/keywords, literals, and punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    fn span_from(&self, start_pos: usize, start_line: usize, start_column: usize) -> Span {
        Span::new(start_pos, self.byte_pos(), start_line, start_column)
    }

    /// Reads one token, assuming spaces/tabs and comments have already been
    /// handled by the caller.
    pub(super) fn read_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.byte_pos();
        let start_line = self.line;
        let start_column = self.column;
        let byte = self
            .current_byte()
            .expect("read_token called at end of input");

        if byte == b'_' || byte.is_ascii_alphabetic() {
            return Ok(self.read_identifier_or_keyword(start_pos, start_line, start_column));
        }
        if byte.is_ascii_digit() {
            return self.read_number(start_pos, start_line, start_column);
        }
        if byte == b'"' || byte == b'\'' {
            return self.read_string(byte, start_pos, start_line, start_column);
        }
        self.read_punctuation(byte, start_pos, start_line, start_column)
    }

    /// `[A-Za-z_][A-Za-z_0-9]*`; resolved against the keyword/bool-literal
    /// table, falling back to a plain identifier.
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while matches!(self.current_byte(), Some(b) if b == b'_' || b.is_ascii_alphanumeric()) {
            self.advance();
        }
        let text = &self.input[start_pos..self.byte_pos()];
        let span = self.span_from(start_pos, start_line, start_column);
        let kind = TokenKind::keyword_for(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()));
        Token::new(kind, span)
    }

    /// Integer or float literal. Underscores inside digit runs are permitted
    /// and ignored; a `.` starts a decimal part only when followed by a digit
    /// (otherwise it is member-access and is left for the next token).
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.consume_digit_run();

        let has_fraction = self.current_byte() == Some(b'.')
            && self.input.as_bytes().get(self.byte_pos() + 1).is_some_and(u8::is_ascii_digit);

        if has_fraction {
            self.advance(); // '.'
            self.consume_digit_run();
            let text: String = self.input[start_pos..self.byte_pos()]
                .chars()
                .filter(|c| *c != '_')
                .collect();
            let span = self.span_from(start_pos, start_line, start_column);
            let value: f64 = text
                .parse()
                .map_err(|_| LexError::invalid_number(&text, span))?;
            return Ok(Token::new(TokenKind::FloatLiteral(value), span));
        }

        let text: String = self.input[start_pos..self.byte_pos()]
            .chars()
            .filter(|c| *c != '_')
            .collect();
        let span = self.span_from(start_pos, start_line, start_column);
        let value: i64 = text
            .parse()
            .map_err(|_| LexError::invalid_number(&text, span))?;
        Ok(Token::new(TokenKind::IntLiteral(value), span))
    }

    fn consume_digit_run(&mut self) {
        while matches!(self.current_byte(), Some(b) if b.is_ascii_digit() || b == b'_') {
            self.advance();
        }
    }

    /// String literal delimited by `quote` (either `"` or `'`). No escape
    /// sequences are interpreted; the contents are copied verbatim.
    fn read_string(
        &mut self,
        quote: u8,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let content_start = self.byte_pos();
        loop {
            match self.current_byte() {
                Some(b) if b == quote => {
                    let content = self.input[content_start..self.byte_pos()].to_string();
                    self.advance(); // closing quote
                    let span = self.span_from(start_pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringLiteral(content), span));
                }
                Some(b'\n') | None => {
                    let span = self.span_from(start_pos, start_line, start_column);
                    return Err(LexError::unterminated_string(span));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Matches the longest punctuation/operator token starting at `byte`,
    /// checked two bytes before one so compounds like `==` beat `=`.
    fn read_punctuation(
        &mut self,
        byte: u8,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        macro_rules! one {
            ($kind:expr) => {{
                self.advance();
                Ok(Token::new($kind, self.span_from(start_pos, start_line, start_column)))
            }};
        }
        macro_rules! maybe_eq {
            ($plain:expr, $with_eq:expr) => {{
                self.advance();
                if self.current_byte() == Some(b'=') {
                    self.advance();
                    Ok(Token::new($with_eq, self.span_from(start_pos, start_line, start_column)))
                } else {
                    Ok(Token::new($plain, self.span_from(start_pos, start_line, start_column)))
                }
            }};
        }

        match byte {
            b'(' => one!(TokenKind::LeftParen),
            b')' => one!(TokenKind::RightParen),
            b'{' => one!(TokenKind::LeftBrace),
            b'}' => one!(TokenKind::RightBrace),
            b'[' => one!(TokenKind::LeftBracket),
            b']' => one!(TokenKind::RightBracket),
            b',' => one!(TokenKind::Comma),
            b';' => one!(TokenKind::Semicolon),
            b'.' => one!(TokenKind::Dot),
            b'@' => one!(TokenKind::At),
            b'~' => one!(TokenKind::Tilde),
            b'!' => maybe_eq!(TokenKind::Bang, TokenKind::BangEqual),
            b'=' => maybe_eq!(TokenKind::Equals, TokenKind::EqualEqual),
            b'<' => maybe_eq!(TokenKind::Less, TokenKind::LessEqual),
            b'>' => maybe_eq!(TokenKind::Greater, TokenKind::GreaterEqual),
            b'+' => maybe_eq!(TokenKind::Plus, TokenKind::PlusEqual),
            b'-' => maybe_eq!(TokenKind::Minus, TokenKind::MinusEqual),
            b'*' => maybe_eq!(TokenKind::Star, TokenKind::StarEqual),
            b'/' => maybe_eq!(TokenKind::Slash, TokenKind::SlashEqual),
            b'%' => maybe_eq!(TokenKind::Percent, TokenKind::PercentEqual),
            b'&' => maybe_eq!(TokenKind::Amp, TokenKind::AmpEqual),
            b'|' => maybe_eq!(TokenKind::Pipe, TokenKind::PipeEqual),
            b'^' => maybe_eq!(TokenKind::Caret, TokenKind::CaretEqual),
            b':' => {
                self.advance();
                if self.current_byte() == Some(b':') {
                    self.advance();
                    Ok(Token::new(
                        TokenKind::ColonColon,
                        self.span_from(start_pos, start_line, start_column),
                    ))
                } else {
                    Ok(Token::new(
                        TokenKind::Colon,
                        self.span_from(start_pos, start_line, start_column),
                    ))
                }
            }
            _ => {
                let span = self.span_from(start_pos, start_line, start_column);
                self.advance();
                Err(LexError::unexpected_byte(byte, span))
            }
        }
    }
}
