use super::check;
use crate::semantic::CheckError;

#[test]
fn struct_declares_members_and_is_registered() {
    let module = check("struct Point { x: int, y: int }").unwrap();
    assert!(module.structs.contains_key("Point"));
    assert_eq!(module.structs["Point"].members.len(), 2);
}

#[test]
fn non_generic_empty_struct_is_accepted() {
    check("struct Box { x: int }").unwrap();
}

#[test]
fn unused_generic_type_variable_is_a_value_error() {
    let err = check("struct Box[T] { x: int }").unwrap_err();
    assert!(matches!(err, CheckError::Value { .. }));
}

#[test]
fn used_generic_type_variable_is_accepted() {
    check("struct Box[T] { x: T }").unwrap();
}

#[test]
fn struct_method_sees_self_as_a_bound_parameter() {
    check("struct Point { x: int, y: int, fun sum(self: Point) int { return self.x + self.y } }").unwrap();
}

#[test]
fn duplicate_struct_name_is_a_name_error() {
    let err = check("struct Point { x: int }\nstruct Point { y: int }").unwrap_err();
    assert!(matches!(err, CheckError::Name { .. }));
}

#[test]
fn struct_literal_and_member_access_type_check() {
    check(
        "struct Point { x: int, y: int }\nfun main() int { let p: Point = Point { x: 1, y: 2 } return p.x }",
    )
    .unwrap();
}

#[test]
fn unknown_member_access_is_a_name_error() {
    let err = check("struct Point { x: int }\nfun main() int { let p: Point = Point { x: 1 } return p.z }")
        .unwrap_err();
    assert!(matches!(err, CheckError::Name { .. }));
}
