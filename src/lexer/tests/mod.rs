//! Unit tests for the lexer, grouped by the kind of token under test.

mod keywords;
mod numbers;
mod strings;

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Lexes `source` and returns its token kinds with the trailing `Eof` dropped.
pub(super) fn kinds(source: &str) -> Vec<TokenKind> {
    let mut tokens = Lexer::new(source).tokenize().expect("lex failed");
    assert!(matches!(tokens.pop().unwrap().kind, TokenKind::Eof));
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_yields_only_eof() {
    let tokens = Lexer::new("").tokenize().unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0].kind, TokenKind::Eof));
}

#[test]
fn concatenating_spans_reproduces_source_modulo_trivia() {
    // Property 1: token spans in order reconstruct the non-trivia source text.
    let source = "fun add(a: int, b: int) int { return a + b }";
    let tokens = Lexer::new(source).tokenize().unwrap();
    let mut rebuilt = String::new();
    for token in &tokens {
        if matches!(token.kind, TokenKind::Eof) {
            continue;
        }
        rebuilt.push_str(&source[token.span.start..token.span.end]);
        rebuilt.push(' ');
    }
    assert_eq!(rebuilt.split_whitespace().collect::<Vec<_>>().join(" "), source);
}

#[test]
fn lexing_twice_yields_identical_tokens() {
    // Property 6: idempotence of lexing.
    let source = "let x: int = 1 + 2 # trailing\nreturn x";
    let first = Lexer::new(source).tokenize().unwrap();
    let second = Lexer::new(source).tokenize().unwrap();
    assert_eq!(first, second);
}

#[test]
fn newline_is_a_distinct_token() {
    let kinds = kinds("let x: int = 1\nlet y: int = 2");
    assert!(kinds.contains(&TokenKind::Newline));
}

#[test]
fn tracks_line_numbers_across_newlines() {
    let tokens = Lexer::new("let\nx").tokenize().unwrap();
    let ident = tokens
        .iter()
        .find(|t| matches!(t.kind, TokenKind::Identifier(_)))
        .unwrap();
    assert_eq!(ident.span.line, 2);
}
