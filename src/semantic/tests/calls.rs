use super::check;
use crate::ast::{ExprKind, StmtKind};
use crate::semantic::{CheckError, FunctionEntry};

#[test]
fn unresolved_call_is_a_name_error() {
    let err = check("fun main() int { return missing() }").unwrap_err();
    assert!(matches!(err, CheckError::Name { .. }));
}

#[test]
fn call_resolves_to_the_matching_overload() {
    let src = "fun add(a: int, b: int) int { return a + b }\n\
               fun add(a: float, b: float) float { return a + b }\n\
               fun main() int { return add(1, 2) }";
    check(src).unwrap();
}

#[test]
fn extern_function_is_callable() {
    check("extern fun printf(s: str) int\nfun main() int { return printf(\"hi\") }").unwrap();
}

#[test]
fn method_call_through_variable_prepends_implicit_receiver() {
    let src = "struct Point { x: int, y: int, fun sum(self: Point) int { return self.x + self.y } }\n\
               fun main() int { let p: Point = Point { x: 1, y: 2 } return p.sum() }";
    let module = check(src).unwrap();
    let main_fn = match module.functions.get("main").unwrap().values().next().unwrap() {
        FunctionEntry::Declared(f) => f,
        FunctionEntry::Extern(_) => panic!("expected a declared function"),
    };
    let StmtKind::Return(Some(call_expr)) = &main_fn.body[1].kind else {
        panic!("expected a return statement");
    };
    let ExprKind::Call { resolution, .. } = &call_expr.kind else {
        panic!("expected a call expression");
    };
    let resolved = resolution.borrow();
    let resolved = resolved.as_ref().unwrap();
    assert!(resolved.implicit_receiver);
    assert_eq!(resolved.owning_struct.as_deref(), Some("Point"));
}
