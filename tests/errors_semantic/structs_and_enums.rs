use super::helpers::assert_fails_with;

#[test]
fn a_struct_declared_twice_is_a_name_error() {
    assert_fails_with(
        "struct Point { x: int } struct Point { x: int } fun main() int { return 0 }",
        "Name",
    );
}

#[test]
fn an_enum_declared_twice_is_a_name_error() {
    assert_fails_with(
        "enum Color { Red } enum Color { Blue } fun main() int { return 0 }",
        "Name",
    );
}

#[test]
fn an_unused_generic_type_variable_is_a_value_error() {
    assert_fails_with("struct Box[T] { x: int } fun main() int { return 0 }", "Value");
}

#[test]
fn redeclaring_an_extern_function_is_a_name_error() {
    assert_fails_with(
        "extern fun f(a: int) int\nextern fun f(a: int) int\nfun main() int { return 0 }",
        "Name",
    );
}
