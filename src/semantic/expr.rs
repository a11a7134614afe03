//! Expression type inference.

use std::collections::HashMap;

use crate::ast::{BinaryOp, Expr, ExprKind, Literal, TypeExpr};

use super::calls::resolve_call;
use super::error::CheckError;
use super::module::Module;

/// The local variable scope threaded through expression and statement
/// checking: the enclosing module (read-only, for constants/structs/
/// enums/functions) plus the current function's mutable variable map.
pub struct Scope<'a> {
    pub module: &'a Module,
    pub locals: &'a mut HashMap<String, TypeExpr>,
}

pub fn literal_type(lit: &Literal) -> TypeExpr {
    match lit {
        Literal::Int(_) => TypeExpr::name("int"),
        Literal::Float(_) => TypeExpr::name("float"),
        Literal::Str(_) => TypeExpr::name("str"),
        Literal::Bool(_) => TypeExpr::name("bool"),
    }
}

/// Computes the type of `expr`, recursively checking its sub-expressions
/// and, for `Call` nodes, resolving and recording the call target.
pub fn type_of(expr: &Expr, scope: &mut Scope) -> Result<TypeExpr, CheckError> {
    let line = expr.span.line;
    match &expr.kind {
        ExprKind::Name(name) => lookup_name(name, line, scope),
        ExprKind::Literal(lit) => Ok(literal_type(lit)),
        ExprKind::Parenthesized(inner) => type_of(inner, scope),
        ExprKind::Not(inner) => {
            let inner_ty = type_of(inner, scope)?;
            if !inner_ty.matches(&TypeExpr::name("bool")) {
                return Err(CheckError::ty(line, format!("cannot negate a value of type '{inner_ty}'")));
            }
            Ok(TypeExpr::name("bool"))
        }
        ExprKind::BinaryOperation { left, right, .. } => {
            let left_ty = type_of(left, scope)?;
            let right_ty = type_of(right, scope)?;
            if !left_ty.matches(&right_ty) {
                return Err(CheckError::ty(
                    line,
                    format!("mismatched operand types '{left_ty}' and '{right_ty}'"),
                ));
            }
            Ok(left_ty)
        }
        ExprKind::Dot { head, name } => type_of_dot(head, name, line, scope),
        ExprKind::Item { head, args } => type_of_item(head, args, line, scope),
        ExprKind::Call { head, args, resolution } => resolve_call(head, args, resolution, line, scope),
        ExprKind::Struct { ty, fields } => type_of_struct(ty, fields, line, scope),
        ExprKind::Array(values) => type_of_array(values, scope),
    }
}

fn lookup_name(name: &str, line: usize, scope: &mut Scope) -> Result<TypeExpr, CheckError> {
    if let Some(ty) = scope.locals.get(name) {
        return Ok(ty.clone());
    }
    if let Some(ty) = scope.module.constants.get(name) {
        return Ok(ty.clone());
    }
    if scope.module.enums.contains_key(name) || scope.module.structs.contains_key(name) {
        return Ok(TypeExpr::name("type"));
    }
    Err(CheckError::name(line, format!("undeclared name '{name}'")))
}

fn type_of_dot(head: &Expr, member: &str, line: usize, scope: &mut Scope) -> Result<TypeExpr, CheckError> {
    if let ExprKind::Name(enum_name) = &head.kind {
        if let Some(decl) = scope.module.find_enum(enum_name) {
            if decl.members.iter().any(|m| m.name == *member) {
                return Ok(TypeExpr::name("int"));
            }
            return Err(CheckError::name(
                line,
                format!("enum '{enum_name}' has no member '{member}'"),
            ));
        }
    }
    let head_ty = type_of(head, scope)?;
    let struct_name = head_ty.head_name();
    let decl = scope
        .module
        .find_struct(struct_name)
        .ok_or_else(|| CheckError::name(line, format!("'{struct_name}' is not a struct in scope")))?;
    decl.members
        .iter()
        .find(|m| m.name == member)
        .map(|m| m.ty.clone())
        .ok_or_else(|| CheckError::name(line, format!("struct '{struct_name}' has no member '{member}'")))
}

fn type_of_item(head: &Expr, args: &[Expr], line: usize, scope: &mut Scope) -> Result<TypeExpr, CheckError> {
    let head_ty = type_of(head, scope)?;
    for arg in args {
        type_of(arg, scope)?;
    }
    if head_ty.canonical() == "str" {
        return Ok(TypeExpr::name("char"));
    }
    if let TypeExpr::Generic { name, params } = &head_ty {
        if name == "arr" {
            return Ok(params.first().cloned().unwrap_or_else(|| TypeExpr::name("any")));
        }
    }
    Err(CheckError::ty(line, format!("cannot index a value of type '{head_ty}'")))
}

fn type_of_struct(
    ty: &TypeExpr,
    fields: &[(String, Expr)],
    line: usize,
    scope: &mut Scope,
) -> Result<TypeExpr, CheckError> {
    let struct_name = ty.head_name();
    if scope.module.find_struct(struct_name).is_none() {
        return Err(CheckError::name(line, format!("undeclared struct '{struct_name}'")));
    }
    for (_, value) in fields {
        type_of(value, scope)?;
    }
    Ok(ty.clone())
}

fn type_of_array(values: &[Expr], scope: &mut Scope) -> Result<TypeExpr, CheckError> {
    let mut elem = None;
    for value in values {
        let ty = type_of(value, scope)?;
        elem = Some(match elem {
            None => ty,
            Some(prev) => {
                if prev.matches(&ty) {
                    prev
                } else {
                    TypeExpr::name("any")
                }
            }
        });
    }
    Ok(TypeExpr::generic("arr", vec![elem.unwrap_or_else(|| TypeExpr::name("any"))]))
}
