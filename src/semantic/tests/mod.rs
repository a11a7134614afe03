use std::collections::HashMap;

use crate::semantic::module::{MapLoader, SourceLoader};
use crate::semantic::{CheckError, Checker, Module};

mod calls;
mod imports;
mod structs;

pub(super) fn check(src: &str) -> Result<Module, CheckError> {
    let loader = MapLoader { sources: HashMap::new() };
    Checker::new().check_program("main", src, &loader)
}

pub(super) fn check_with(src: &str, extra: &[(&str, &str)]) -> Result<Module, CheckError> {
    let mut sources = HashMap::new();
    for (path, text) in extra {
        sources.insert(path.to_string(), text.to_string());
    }
    let loader = MapLoader { sources };
    Checker::new().check_program("main", src, &loader)
}

#[test]
fn empty_program_yields_an_empty_module() {
    let module = check("").unwrap();
    assert!(module.functions.is_empty());
    assert!(module.structs.is_empty());
}

#[test]
fn duplicate_overload_signature_is_a_name_error() {
    let err = check("fun f(a: int) int { return a } fun f(a: int) int { return a }").unwrap_err();
    assert!(matches!(err, CheckError::Name { .. }));
}

#[test]
fn distinct_overloads_are_both_accepted() {
    let module = check(
        "fun add(a: int, b: int) int { return a + b }\nfun add(a: float, b: float) float { return a + b }",
    )
    .unwrap();
    assert_eq!(module.functions.get("add").unwrap().len(), 2);
}

#[test]
fn use_of_undeclared_name_is_a_name_error() {
    let err = check("fun f() int { return x }").unwrap_err();
    assert!(matches!(err, CheckError::Name { .. }));
}

#[test]
fn mismatched_binary_operand_types_is_a_type_error() {
    let err = check("fun f() int { return 1 + 1.0 }").unwrap_err();
    assert!(matches!(err, CheckError::Type { .. }));
}

#[test]
fn let_annotation_mismatch_is_a_type_error() {
    let err = check("fun f() int { let x: int = \"s\" return x }").unwrap_err();
    assert!(matches!(err, CheckError::Type { .. }));
}

#[test]
fn let_without_annotation_infers_the_value_type() {
    check("fun f() int { let x = 1 return x }").unwrap();
}
