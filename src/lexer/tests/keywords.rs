use super::kinds;
use crate::token::TokenKind;

#[test]
fn all_keywords_are_recognized() {
    let source = "import extern struct enum fun return let if else while for in from";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Import,
            TokenKind::Extern,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::Fun,
            TokenKind::Return,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::From,
        ]
    );
}

#[test]
fn bool_literals_are_not_identifiers() {
    assert_eq!(
        kinds("true false"),
        vec![TokenKind::BoolLiteral(true), TokenKind::BoolLiteral(false)]
    );
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    // "funny" must not be split into `fun` + "ny".
    assert_eq!(kinds("funny"), vec![TokenKind::Identifier("funny".into())]);
}
