use super::parse;
use crate::ast::TopLevel;

#[test]
fn import_with_dotted_path() {
    let program = parse("import std.io.files");
    match &program.items[0] {
        TopLevel::Import(i) => assert_eq!(i.path, "std.io.files"),
        other => panic!("expected Import, got {other:?}"),
    }
}

#[test]
fn extern_declares_a_bodyless_function() {
    let program = parse("extern fun printf(s: str) int");
    match &program.items[0] {
        TopLevel::Extern(e) => {
            assert_eq!(e.head.name, "printf");
            assert_eq!(e.head.params.len(), 1);
        }
        other => panic!("expected Extern, got {other:?}"),
    }
}

#[test]
fn function_declaration_with_body() {
    let program = parse("fun main() int { return 0 }");
    match &program.items[0] {
        TopLevel::Function(f) => {
            assert_eq!(f.head.name, "main");
            assert_eq!(f.body.len(), 1);
        }
        other => panic!("expected Function, got {other:?}"),
    }
}

#[test]
fn struct_declaration_with_members_and_method() {
    let src = "struct Point { x: int, y: int, fun sum(self: Point) int { return self.x } }";
    let program = parse(src);
    match &program.items[0] {
        TopLevel::Struct(s) => {
            assert_eq!(s.members.len(), 2);
            assert_eq!(s.methods.len(), 1);
            assert_eq!(s.methods[0].head.name, "sum");
        }
        other => panic!("expected Struct, got {other:?}"),
    }
}

#[test]
fn enum_declaration_with_members() {
    let program = parse("enum Color { Red, Green, Blue }");
    match &program.items[0] {
        TopLevel::Enum(e) => {
            assert_eq!(e.name, "Color");
            assert_eq!(e.members.len(), 3);
            assert_eq!(e.members[1].name, "Green");
        }
        other => panic!("expected Enum, got {other:?}"),
    }
}

#[test]
fn top_level_let_constant() {
    let program = parse("let MAX: int = 100");
    match &program.items[0] {
        TopLevel::Let(l) => assert_eq!(l.name, "MAX"),
        other => panic!("expected Let, got {other:?}"),
    }
}

#[test]
fn top_level_comment_is_preserved() {
    let program = parse("# a note\nfun main() int { return 0 }");
    assert!(matches!(program.items[0], TopLevel::Comment(_)));
    assert!(matches!(program.items[1], TopLevel::Function(_)));
}

#[test]
fn generic_struct_declaration() {
    let program = parse("struct Box[T] { x: T }");
    match &program.items[0] {
        TopLevel::Struct(s) => assert_eq!(s.ty.head_name(), "Box"),
        other => panic!("expected Struct, got {other:?}"),
    }
}
