//! Token kinds recognized by the Greek lexer.

/// The kind of token produced by the lexer.
///
/// Punctuation and keyword variants carry no data; two tokens of the same
/// variant are always equal regardless of where they occurred. `Identifier`,
/// literal and comment variants carry their text and compare by value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords (closed set, see spec §6.1)
    Import,
    Extern,
    Struct,
    Enum,
    Fun,
    Return,
    Let,
    If,
    Else,
    While,
    For,
    In,
    From,

    // Punctuation and operators
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Bang,
    Equals,
    Less,
    Greater,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    At,
    Amp,
    Pipe,
    Caret,
    Tilde,
    BangEqual,
    EqualEqual,
    LessEqual,
    GreaterEqual,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    AmpEqual,
    PipeEqual,
    CaretEqual,
    Colon,
    Semicolon,
    Dot,
    Comma,
    ColonColon,

    /// A maximal identifier run that is not a keyword or boolean literal.
    Identifier(String),

    /// An integer literal, e.g. `42` or `1_000`.
    IntLiteral(i64),
    /// A float literal, e.g. `3.14`.
    FloatLiteral(f64),
    /// A single- or double-quoted string literal (raw bytes, unescaped).
    StringLiteral(String),
    /// `true` or `false`.
    BoolLiteral(bool),

    /// A `#`-to-end-of-line comment, passed through at the top level.
    Comment(String),

    /// A line break. Only significant in that it advances the line counter;
    /// statements are never terminated by it.
    Newline,

    /// Marks the end of the token stream. Always the final token produced.
    Eof,
}

impl TokenKind {
    /// The keyword this identifier text denotes, if any.
    pub fn keyword_for(text: &str) -> Option<TokenKind> {
        Some(match text {
            "import" => TokenKind::Import,
            "extern" => TokenKind::Extern,
            "struct" => TokenKind::Struct,
            "enum" => TokenKind::Enum,
            "fun" => TokenKind::Fun,
            "return" => TokenKind::Return,
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "in" => TokenKind::In,
            "from" => TokenKind::From,
            "true" => TokenKind::BoolLiteral(true),
            "false" => TokenKind::BoolLiteral(false),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_for_recognizes_all_keywords() {
        let keywords = [
            "import", "extern", "struct", "enum", "fun", "return", "let", "if", "else", "while",
            "for", "in", "from",
        ];
        for kw in keywords {
            assert!(TokenKind::keyword_for(kw).is_some(), "missing: {kw}");
        }
    }

    #[test]
    fn keyword_for_recognizes_bool_literals() {
        assert_eq!(
            TokenKind::keyword_for("true"),
            Some(TokenKind::BoolLiteral(true))
        );
        assert_eq!(
            TokenKind::keyword_for("false"),
            Some(TokenKind::BoolLiteral(false))
        );
    }

    #[test]
    fn keyword_for_rejects_plain_identifiers() {
        assert_eq!(TokenKind::keyword_for("foobar"), None);
    }

    #[test]
    fn identifier_equality_is_by_value() {
        assert_eq!(
            TokenKind::Identifier("x".into()),
            TokenKind::Identifier("x".into())
        );
        assert_ne!(
            TokenKind::Identifier("x".into()),
            TokenKind::Identifier("y".into())
        );
    }
}
