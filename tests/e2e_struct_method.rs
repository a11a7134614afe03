//! Scenario C — a struct method's implicit receiver is prepended as the
//! first C argument.

mod common;

#[test]
fn struct_method_receiver_is_prepended() {
    let source = r#"
        struct Point { x: int, y: int, fun sum(self: Point) int { return self.x + self.y } }
        fun main() int { let p: Point = Point{1, 2} return p.sum() }
    "#;

    let generated = common::compile_ok(source);

    assert!(
        generated.contains("typedef struct { int x; int y; } Point;"),
        "missing struct typedef:\n{generated}"
    );
    assert!(
        generated.contains("int Point__sum(Point self)"),
        "missing mangled method signature:\n{generated}"
    );
    assert!(generated.contains("Point__sum(p)"), "receiver not prepended at the call site:\n{generated}");
}
