use super::helpers::assert_fails_with;

#[test]
fn calling_an_undeclared_function_is_a_name_error() {
    assert_fails_with("fun main() int { return missing() }", "Name");
}

#[test]
fn no_overload_matches_the_call_signature_is_a_name_error() {
    assert_fails_with(
        "fun f(a: int) int { return a } fun main() int { return f(1.5) }",
        "Name",
    );
}

#[test]
fn binary_operation_between_mismatched_types_is_a_type_error() {
    assert_fails_with("fun main() int { return 1 + \"s\" }", "Type");
}

#[test]
fn dotting_into_an_unknown_struct_member_is_a_name_error() {
    assert_fails_with(
        "struct Point { x: int, y: int } fun main() int { let p: Point = Point { x: 1, y: 2 } return p.z }",
        "Name",
    );
}

#[test]
fn reading_an_undeclared_name_is_a_name_error() {
    assert_fails_with("fun main() int { return missing }", "Name");
}
