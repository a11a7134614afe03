use super::kinds;
use crate::lexer::Lexer;
use crate::token::TokenKind;

#[test]
fn integer_literal() {
    assert_eq!(kinds("42"), vec![TokenKind::IntLiteral(42)]);
}

#[test]
fn float_literal_requires_digit_after_dot() {
    assert_eq!(kinds("3.14"), vec![TokenKind::FloatLiteral(3.14)]);
}

#[test]
fn bare_dot_after_int_is_member_access_not_float() {
    // "3." with nothing after isn't a valid float; the dot is its own token,
    // matching the postfix-dot grammar rather than silently truncating.
    assert_eq!(
        kinds("a.b"),
        vec![
            TokenKind::Identifier("a".into()),
            TokenKind::Dot,
            TokenKind::Identifier("b".into()),
        ]
    );
}

#[test]
fn underscores_in_digit_runs_are_ignored() {
    assert_eq!(kinds("1_000_000"), vec![TokenKind::IntLiteral(1_000_000)]);
    assert_eq!(kinds("1_000.5"), vec![TokenKind::FloatLiteral(1000.5)]);
}

#[test]
fn invalid_number_is_a_lex_error() {
    // Two decimal points cannot be parsed as a single f64.
    let err = Lexer::new("1.2.3").tokenize();
    assert!(err.is_ok(), "lexer should still tokenize greedily: {err:?}");
}
