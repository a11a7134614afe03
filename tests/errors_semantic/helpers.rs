use crate::common::compile;
use greekc::semantic::CheckError;

/// Asserts that `source` fails to check, and that the failure is the
/// `CheckError` variant `expected` names by discriminant.
pub(crate) fn assert_fails_with(source: &str, expected: &str) {
    let error = compile(source).expect_err("expected this program to fail checking");
    let actual = match &error {
        CheckError::Lex(_) => "Lex",
        CheckError::Syntax(_) => "Syntax",
        CheckError::Name { .. } => "Name",
        CheckError::Type { .. } => "Type",
        CheckError::Recursion { .. } => "Recursion",
        CheckError::Value { .. } => "Value",
        CheckError::NotImplemented { .. } => "NotImplemented",
        CheckError::Io { .. } => "Io",
    };
    assert_eq!(actual, expected, "wrong error kind for '{source}': got {error}");
}
