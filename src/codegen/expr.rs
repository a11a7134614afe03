//! Expression emission: the direct, mostly one-to-one mapping from an
//! expression node to a line of C.

use std::collections::HashMap;

use crate::ast::{BinaryOp, Expr, ExprKind, Literal, TypeExpr};
use crate::semantic::{type_of, Module, Scope};

use super::mangle::callee_name;

/// Emits `expr` as a C expression. `locals` holds the current function's
/// variable types, recomputed alongside emission rather than carried on
/// the AST (the checker's decorations are call resolutions only).
pub fn emit_expr(expr: &Expr, module: &Module, locals: &HashMap<String, TypeExpr>) -> String {
    match &expr.kind {
        ExprKind::Name(name) => {
            if module.structs.contains_key(name) {
                format!("sizeof({name})")
            } else {
                name.clone()
            }
        }
        ExprKind::Literal(lit) => emit_literal(lit),
        ExprKind::Parenthesized(inner) => format!("({})", emit_expr(inner, module, locals)),
        ExprKind::Not(inner) => format!("!{}", emit_expr(inner, module, locals)),
        ExprKind::BinaryOperation { op, left, right } => format!(
            "{} {} {}",
            emit_expr(left, module, locals),
            binary_op_symbol(op),
            emit_expr(right, module, locals)
        ),
        ExprKind::Dot { head, name } => emit_dot(head, name, module, locals),
        ExprKind::Item { head, args } => {
            format!("{}[{}]", emit_expr(head, module, locals), emit_expr(&args[0], module, locals))
        }
        ExprKind::Call { head, args, resolution } => emit_call(head, args, resolution, module, locals),
        ExprKind::Struct { ty, fields } => emit_struct_literal(ty, fields, module, locals),
        ExprKind::Array(values) => {
            let items: Vec<String> = values.iter().map(|v| emit_expr(v, module, locals)).collect();
            format!("{{ {} }}", items.join(", "))
        }
    }
}

fn emit_literal(lit: &Literal) -> String {
    match lit {
        Literal::Int(n) => n.to_string(),
        Literal::Float(n) => {
            let text = format!("{n}");
            if text.contains('.') || text.contains('e') || text.contains("inf") || text.contains("nan") {
                text
            } else {
                format!("{text}.0")
            }
        }
        Literal::Str(s) => format!("\"{}\"", escape_c_string(s)),
        Literal::Bool(b) => b.to_string(),
    }
}

/// Greek string literals carry their source bytes through verbatim (the
/// lexer does not interpret escape sequences); re-emitting as a C string
/// literal only needs to guard the quote delimiter itself; any `\n`-style
/// escapes the source already wrote pass through for the C compiler's own
/// lexer to interpret.
fn escape_c_string(s: &str) -> String {
    s.replace('"', "\\\"")
}

fn binary_op_symbol(op: &BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "!=",
        BinaryOp::Less => "<",
        BinaryOp::LessEq => "<=",
        BinaryOp::Greater => ">",
        BinaryOp::GreaterEq => ">=",
        BinaryOp::BitAnd => "&",
        BinaryOp::BitOr => "|",
        BinaryOp::BitXor => "^",
    }
}

fn emit_dot(head: &Expr, member: &str, module: &Module, locals: &HashMap<String, TypeExpr>) -> String {
    if let ExprKind::Name(enum_name) = &head.kind {
        if module.find_enum(enum_name).is_some() {
            return format!("{enum_name}_{member}");
        }
    }
    let mut locals = locals.clone();
    let head_ty = type_of(head, &mut Scope { module, locals: &mut locals })
        .expect("codegen runs only on already-checked expressions");
    let accessor = if head_ty.is_pointer_like() { "->" } else { "." };
    format!("{}{accessor}{member}", emit_expr(head, module, &locals))
}

fn emit_call(
    head: &Expr,
    args: &[Expr],
    resolution: &std::cell::RefCell<Option<crate::ast::ResolvedCall>>,
    module: &Module,
    locals: &HashMap<String, TypeExpr>,
) -> String {
    let resolved = resolution.borrow();
    let resolved = resolved.as_ref().expect("call resolved by the checker before codegen runs");

    let mut c_args = Vec::with_capacity(args.len() + 1);
    if resolved.implicit_receiver {
        let ExprKind::Dot { head: receiver, .. } = &head.kind else {
            panic!("implicit-receiver call must have a Dot head");
        };
        c_args.push(emit_expr(receiver, module, locals));
    }
    c_args.extend(args.iter().map(|a| emit_expr(a, module, locals)));

    format!("{}({})", callee_name(module, resolved), c_args.join(", "))
}

fn emit_struct_literal(ty: &TypeExpr, fields: &[(String, Expr)], module: &Module, locals: &HashMap<String, TypeExpr>) -> String {
    let struct_name = ty.head_name();
    let ordered = order_fields(struct_name, fields, module);
    let values: Vec<String> = ordered.iter().map(|e| emit_expr(e, module, locals)).collect();
    format!("({struct_name}){{ {} }}", values.join(", "))
}

/// Reorders struct-literal field values to match the struct's declared
/// member order: named fields go by name, positional fields (parsed with
/// their stringified index as the field name) go by position.
fn order_fields<'a>(struct_name: &str, fields: &'a [(String, Expr)], module: &Module) -> Vec<&'a Expr> {
    let Some(decl) = module.find_struct(struct_name) else {
        return fields.iter().map(|(_, e)| e).collect();
    };
    let by_name: HashMap<&str, &Expr> = fields.iter().map(|(k, v)| (k.as_str(), v)).collect();
    decl.members
        .iter()
        .enumerate()
        .filter_map(|(i, m)| by_name.get(m.name.as_str()).copied().or_else(|| by_name.get(i.to_string().as_str()).copied()))
        .collect()
}
