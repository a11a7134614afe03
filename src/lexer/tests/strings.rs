use super::kinds;
use crate::lexer::{LexError, Lexer};
use crate::token::TokenKind;

#[test]
fn double_quoted_string() {
    assert_eq!(
        kinds(r#""hello world""#),
        vec![TokenKind::StringLiteral("hello world".into())]
    );
}

#[test]
fn single_quoted_string() {
    assert_eq!(
        kinds("'hi'"),
        vec![TokenKind::StringLiteral("hi".into())]
    );
}

#[test]
fn string_contents_are_copied_verbatim() {
    // No escape-sequence interpretation: a backslash is just a byte.
    assert_eq!(
        kinds(r#""a\nb""#),
        vec![TokenKind::StringLiteral("a\\nb".into())]
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let result = Lexer::new(r#""unterminated"#).tokenize();
    assert!(matches!(result, Err(LexError { .. })));
}

#[test]
fn string_cannot_span_a_newline() {
    let result = Lexer::new("\"line one\nline two\"").tokenize();
    assert!(result.is_err());
}
