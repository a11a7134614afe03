use super::helpers::assert_fails_with;

#[test]
fn let_value_mismatching_its_declared_type_is_a_type_error() {
    assert_fails_with("fun f() int { let x: int = \"s\" return 0 }", "Type");
}

#[test]
fn redeclaring_a_variable_in_the_same_function_is_a_name_error() {
    assert_fails_with("fun f() int { let x = 1 let x = 2 return x }", "Name");
}

#[test]
fn assigning_an_undeclared_name_is_a_name_error() {
    assert_fails_with("fun f() int { missing = 1 return 0 }", "Name");
}

#[test]
fn assignment_value_type_mismatch_is_a_type_error() {
    assert_fails_with("fun f() int { let x = 1 x = \"s\" return x }", "Type");
}

#[test]
fn indexing_a_non_indexable_type_is_a_type_error() {
    assert_fails_with("fun f() int { let x = 1 return x[0] }", "Type");
}
