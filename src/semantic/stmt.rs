//! Statement checking: `let`, assignment, control flow, and bodies.

use std::collections::HashMap;

use crate::ast::{AssignOp, Expr, ExprKind, Stmt, StmtKind, TypeExpr};

use super::error::CheckError;
use super::expr::{type_of, Scope};
use super::module::Module;

/// Checks a function (or method) body against its parameter bindings.
/// Variables introduced by nested `let`s are visible for the remainder of
/// the body - Greek has no block-scoped shadowing beyond the function.
pub fn check_body(
    body: &[Stmt],
    module: &Module,
    locals: &mut HashMap<String, TypeExpr>,
    return_type: Option<&TypeExpr>,
) -> Result<(), CheckError> {
    for stmt in body {
        check_stmt(stmt, module, locals, return_type)?;
    }
    Ok(())
}

fn check_stmt(
    stmt: &Stmt,
    module: &Module,
    locals: &mut HashMap<String, TypeExpr>,
    return_type: Option<&TypeExpr>,
) -> Result<(), CheckError> {
    let line = stmt.span.line;
    match &stmt.kind {
        StmtKind::Let { name, ty, value } => check_let(name, ty.as_ref(), value, line, module, locals),
        StmtKind::Assignment { target, op, value } => {
            check_assignment(target, op, value, line, module, locals)
        }
        StmtKind::Return(value) => {
            let actual = match value {
                Some(expr) => Some(type_of(expr, &mut Scope { module, locals })?),
                None => None,
            };
            if let (Some(expected), Some(actual)) = (return_type, &actual) {
                if !expected.matches(actual) {
                    return Err(CheckError::ty(
                        line,
                        format!("return type '{actual}' does not match declared return type '{expected}'"),
                    ));
                }
            }
            Ok(())
        }
        StmtKind::If { condition, body } => {
            let cond_ty = type_of(condition, &mut Scope { module, locals })?;
            if !cond_ty.matches(&TypeExpr::name("bool")) {
                return Err(CheckError::ty(line, format!("if condition must be bool, found '{cond_ty}'")));
            }
            check_body(body, module, locals, return_type)
        }
        StmtKind::Else { body } => check_body(body, module, locals, return_type),
        StmtKind::While { condition, body } => {
            let cond_ty = type_of(condition, &mut Scope { module, locals })?;
            if !cond_ty.matches(&TypeExpr::name("bool")) {
                return Err(CheckError::ty(line, format!("while condition must be bool, found '{cond_ty}'")));
            }
            check_body(body, module, locals, return_type)
        }
        StmtKind::Expr(expr) => {
            type_of(expr, &mut Scope { module, locals })?;
            Ok(())
        }
    }
}

fn check_let(
    name: &str,
    ty: Option<&TypeExpr>,
    value: &Expr,
    line: usize,
    module: &Module,
    locals: &mut HashMap<String, TypeExpr>,
) -> Result<(), CheckError> {
    let value_ty = type_of(value, &mut Scope { module, locals })?;
    let stored = match ty {
        Some(declared) if matches!(declared, TypeExpr::Generic { .. }) => {
            if !declared.outer_matches(&value_ty) {
                return Err(CheckError::ty(
                    line,
                    format!("let '{name}' declared as '{declared}' but value has type '{value_ty}'"),
                ));
            }
            declared.clone()
        }
        Some(declared) => {
            if !declared.matches(&value_ty) {
                return Err(CheckError::ty(
                    line,
                    format!("let '{name}' declared as '{declared}' but value has type '{value_ty}'"),
                ));
            }
            declared.clone()
        }
        None => value_ty,
    };
    if locals.contains_key(name) {
        return Err(CheckError::name(line, format!("'{name}' is already declared in this scope")));
    }
    locals.insert(name.to_string(), stored);
    Ok(())
}

fn check_assignment(
    target: &Expr,
    _op: &AssignOp,
    value: &Expr,
    line: usize,
    module: &Module,
    locals: &mut HashMap<String, TypeExpr>,
) -> Result<(), CheckError> {
    let value_ty = type_of(value, &mut Scope { module, locals })?;

    match &target.kind {
        // Indexed assignment has weaker type-checking than assignment to a
        // plain name: `str`-element targets accept either `char` or `int`.
        ExprKind::Item { head, .. } => {
            let head_ty = type_of(head, &mut Scope { module, locals })?;
            if head_ty.canonical() == "str" {
                if value_ty.canonical() != "char" && value_ty.canonical() != "int" {
                    return Err(CheckError::ty(
                        line,
                        format!("indexed assignment into a string requires char or int, found '{value_ty}'"),
                    ));
                }
                return Ok(());
            }
            if let TypeExpr::Generic { name, params } = &head_ty {
                if name == "arr" {
                    let elem = params.first().cloned().unwrap_or_else(|| TypeExpr::name("any"));
                    if !elem.matches(&value_ty) {
                        return Err(CheckError::ty(
                            line,
                            format!("array element type '{elem}' does not accept assigned value of type '{value_ty}'"),
                        ));
                    }
                    return Ok(());
                }
            }
            Err(CheckError::ty(line, format!("cannot assign into a value of type '{head_ty}'")))
        }
        ExprKind::Name(name) => {
            let target_ty = type_of(target, &mut Scope { module, locals })?;
            let compatible = if matches!(target_ty, TypeExpr::Generic { .. }) || matches!(value_ty, TypeExpr::Generic { .. }) {
                target_ty.outer_matches(&value_ty)
            } else {
                target_ty.matches(&value_ty)
            };
            if !compatible {
                return Err(CheckError::ty(
                    line,
                    format!("cannot assign value of type '{value_ty}' to '{name}' of type '{target_ty}'"),
                ));
            }
            Ok(())
        }
        // Field mutation: `p.x = value`. `type_of` on the Dot already
        // verifies the head is a known variable of a struct type and
        // resolves the member's declared type, erroring by name if either
        // is unknown.
        ExprKind::Dot { name: member, .. } => {
            let target_ty = type_of(target, &mut Scope { module, locals })?;
            if !target_ty.matches(&value_ty) {
                return Err(CheckError::ty(
                    line,
                    format!("cannot assign value of type '{value_ty}' to member '{member}' of type '{target_ty}'"),
                ));
            }
            Ok(())
        }
        _ => Err(CheckError::ty(line, "invalid assignment target")),
    }
}
