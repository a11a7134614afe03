//! Statement and body emission.

use std::collections::HashMap;

use crate::ast::{AssignOp, Stmt, StmtKind, TypeExpr};
use crate::semantic::{type_of, Module, Scope};

use super::expr::emit_expr;

/// Emits a function (or method) body as a braced C block, tracking local
/// variable types as `let`s are encountered so later statements (indexing,
/// dotted access) can tell pointer members from value members.
pub fn emit_body(body: &[Stmt], module: &Module, locals: &mut HashMap<String, TypeExpr>, indent: usize) -> String {
    let pad = "    ".repeat(indent);
    let mut out = String::from("{\n");
    for stmt in body {
        out.push_str(&emit_stmt(stmt, module, locals, indent + 1));
    }
    out.push_str(&pad);
    out.push('}');
    out
}

fn emit_stmt(stmt: &Stmt, module: &Module, locals: &mut HashMap<String, TypeExpr>, indent: usize) -> String {
    let pad = "    ".repeat(indent);
    match &stmt.kind {
        StmtKind::Let { name, ty, value } => {
            let value_ty = infer(value, module, locals);
            let declared = ty.clone().unwrap_or(value_ty);
            let c_value = emit_expr(value, module, locals);
            locals.insert(name.clone(), declared.clone());
            format!("{pad}{} {name} = {c_value};\n", super::module_types::c_type_name(&declared))
        }
        StmtKind::Assignment { target, op, value } => {
            format!(
                "{pad}{} {} {};\n",
                emit_expr(target, module, locals),
                assign_op_symbol(op),
                emit_expr(value, module, locals)
            )
        }
        StmtKind::Return(value) => match value {
            Some(expr) => format!("{pad}return {};\n", emit_expr(expr, module, locals)),
            None => format!("{pad}return;\n"),
        },
        StmtKind::If { condition, body } => {
            // `let`s inside share the enclosing function's variable scope
            // (Greek has no block scoping beyond the function), so nested
            // bodies thread the same `locals` map rather than a fork of it.
            format!(
                "{pad}if ({}) {}\n",
                emit_expr(condition, module, locals),
                emit_body(body, module, locals, indent)
            )
        }
        StmtKind::Else { body } => {
            format!("{pad}else {}\n", emit_body(body, module, locals, indent))
        }
        StmtKind::While { condition, body } => {
            format!(
                "{pad}while ({}) {}\n",
                emit_expr(condition, module, locals),
                emit_body(body, module, locals, indent)
            )
        }
        StmtKind::Expr(expr) => format!("{pad}{};\n", emit_expr(expr, module, locals)),
    }
}

fn infer(expr: &crate::ast::Expr, module: &Module, locals: &HashMap<String, TypeExpr>) -> TypeExpr {
    let mut locals = locals.clone();
    type_of(expr, &mut Scope { module, locals: &mut locals }).expect("codegen runs only on already-checked expressions")
}

fn assign_op_symbol(op: &AssignOp) -> &'static str {
    match op {
        AssignOp::Assign => "=",
        AssignOp::AddAssign => "+=",
        AssignOp::SubAssign => "-=",
        AssignOp::MulAssign => "*=",
        AssignOp::DivAssign => "/=",
        AssignOp::ModAssign => "%=",
        AssignOp::AndAssign => "&=",
        AssignOp::OrAssign => "|=",
        AssignOp::XorAssign => "^=",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, ExprKind, Literal};
    use crate::token::Span;

    fn lit(n: i64) -> Expr {
        Expr::new(ExprKind::Literal(Literal::Int(n)), Span::synthetic(1))
    }

    #[test]
    fn let_statement_declares_and_initializes() {
        let module = Module::new("main");
        let mut locals = HashMap::new();
        let stmt = Stmt::new(StmtKind::Let { name: "x".into(), ty: None, value: lit(1) }, Span::synthetic(1));
        let out = emit_stmt(&stmt, &module, &mut locals, 0);
        assert_eq!(out, "int x = 1;\n");
        assert_eq!(locals.get("x"), Some(&TypeExpr::name("int")));
    }

    #[test]
    fn return_with_no_value_has_no_expression() {
        let module = Module::new("main");
        let mut locals = HashMap::new();
        let stmt = Stmt::new(StmtKind::Return(None), Span::synthetic(1));
        assert_eq!(emit_stmt(&stmt, &module, &mut locals, 0), "return;\n");
    }

    #[test]
    fn body_wraps_statements_in_braces() {
        let module = Module::new("main");
        let mut locals = HashMap::new();
        let body = vec![Stmt::new(StmtKind::Return(Some(lit(0))), Span::synthetic(1))];
        let out = emit_body(&body, &module, &mut locals, 0);
        assert_eq!(out, "{\n    return 0;\n}");
    }
}
