use super::check_with;
use crate::semantic::CheckError;

#[test]
fn importing_a_module_registers_it_by_dotted_path() {
    let module = check_with("import helper", &[("helper", "fun f() int { return 1 }")]).unwrap();
    assert!(module.modules.contains_key("helper"));
}

#[test]
fn direct_self_import_is_a_recursion_error() {
    let err = check_with("import a", &[("a", "import a")]).unwrap_err();
    assert!(matches!(err, CheckError::Recursion { .. }));
}

#[test]
fn mutual_import_cycle_is_a_recursion_error() {
    let err = check_with("import a", &[("a", "import b"), ("b", "import a")]).unwrap_err();
    assert!(matches!(err, CheckError::Recursion { .. }));
}

#[test]
fn diamond_import_is_not_a_cycle() {
    // main imports both a and b, which both import c: not a cycle.
    let module = check_with(
        "import a\nimport b",
        &[
            ("a", "import c"),
            ("b", "import c"),
            ("c", "fun f() int { return 1 }"),
        ],
    )
    .unwrap();
    assert!(module.modules.contains_key("a"));
    assert!(module.modules.contains_key("b"));
}

#[test]
fn imported_function_is_callable_unqualified() {
    let module = check_with(
        "import helper\nfun main() int { return f() }",
        &[("helper", "fun f() int { return 1 }")],
    )
    .unwrap();
    assert!(module.functions.contains_key("main"));
}
