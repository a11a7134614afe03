//! Parse-stage failures: the token stream violates the grammar.

mod common;

use greekc::semantic::CheckError;

#[test]
fn a_missing_closing_brace_is_a_syntax_error() {
    let error = common::compile("fun main() int { return 0").expect_err("unterminated body must fail");
    assert!(matches!(error, CheckError::Syntax(_)), "expected a syntax error, got: {error}");
}

#[test]
fn a_bare_fun_keyword_with_no_head_is_a_syntax_error() {
    let error = common::compile("fun").expect_err("a function head must follow 'fun'");
    assert!(matches!(error, CheckError::Syntax(_)), "expected a syntax error, got: {error}");
}
