//! Call resolution: matching a call site's argument types against the
//! candidate overload set its head designates.

use std::cell::RefCell;

use crate::ast::{Expr, ExprKind, ResolvedCall, TypeExpr};

use super::error::CheckError;
use super::expr::{type_of, Scope};
use super::module::Module;

pub fn resolve_call(
    head: &Expr,
    args: &[Expr],
    resolution: &RefCell<Option<ResolvedCall>>,
    line: usize,
    scope: &mut Scope,
) -> Result<TypeExpr, CheckError> {
    let mut arg_types = Vec::with_capacity(args.len());
    for arg in args {
        arg_types.push(type_of(arg, scope)?);
    }

    let resolved = match &head.kind {
        ExprKind::Dot { head: inner, name: f } => resolve_dotted_call(inner, f, arg_types, line, scope)?,
        ExprKind::Name(f) => resolve_plain_call(f, arg_types, line, scope)?,
        _ => {
            return Err(CheckError::not_implemented(
                line,
                "call head must be a name or a dotted name",
            ))
        }
    };

    let return_type = find_return_type(&resolved, scope.module)
        .ok_or_else(|| CheckError::name(line, format!("no function named '{}' found", resolved.function_name)))?;

    *resolution.borrow_mut() = Some(resolved);
    Ok(return_type)
}

fn resolve_plain_call(
    name: &str,
    arg_types: Vec<TypeExpr>,
    line: usize,
    scope: &Scope,
) -> Result<ResolvedCall, CheckError> {
    if scope.module.find_function(name, &arg_types).is_some() {
        return Ok(ResolvedCall {
            function_name: name.to_string(),
            signature: arg_types,
            owning_module: scope.module.name.clone(),
            owning_struct: None,
            implicit_receiver: false,
        });
    }
    // Functions pulled in transitively by imports are callable unqualified.
    for imported in scope.module.modules.values() {
        if imported.find_function(name, &arg_types).is_some() {
            return Ok(ResolvedCall {
                function_name: name.to_string(),
                signature: arg_types,
                owning_module: imported.name.clone(),
                owning_struct: None,
                implicit_receiver: false,
            });
        }
    }
    Err(CheckError::name(
        line,
        format!("no function '{name}' with signature ({})", describe(&arg_types)),
    ))
}

fn resolve_dotted_call(
    inner: &Expr,
    method: &str,
    mut arg_types: Vec<TypeExpr>,
    line: usize,
    scope: &mut Scope,
) -> Result<ResolvedCall, CheckError> {
    let ExprKind::Name(qualifier) = &inner.kind else {
        return Err(CheckError::not_implemented(line, "unsupported call head"));
    };

    if let Some(decl) = scope.module.find_struct(qualifier) {
        // Called through the struct itself: `Struct.method(args)`, no receiver.
        if let Some(method_decl) = decl.methods.iter().find(|m| m.head.param_types() == arg_types && m.head.name == method)
        {
            return Ok(ResolvedCall {
                function_name: method_decl.head.name.clone(),
                signature: arg_types,
                owning_module: scope.module.name.clone(),
                owning_struct: Some(qualifier.clone()),
                implicit_receiver: false,
            });
        }
        return Err(CheckError::name(
            line,
            format!("struct '{qualifier}' has no method '{method}' with signature ({})", describe(&arg_types)),
        ));
    }

    if let Some(receiver_ty) = scope.locals.get(qualifier).cloned().or_else(|| scope.module.constants.get(qualifier).cloned())
    {
        let struct_name = receiver_ty.head_name().to_string();
        if let Some(decl) = scope.module.find_struct(&struct_name) {
            let mut full_sig = vec![receiver_ty.clone()];
            full_sig.extend(arg_types.clone());
            if let Some(method_decl) = decl
                .methods
                .iter()
                .find(|m| m.head.param_types() == full_sig && m.head.name == method)
            {
                arg_types.insert(0, receiver_ty);
                let _ = method_decl;
                return Ok(ResolvedCall {
                    function_name: method.to_string(),
                    signature: arg_types,
                    owning_module: scope.module.name.clone(),
                    owning_struct: Some(struct_name),
                    implicit_receiver: true,
                });
            }
            return Err(CheckError::name(
                line,
                format!("struct '{struct_name}' has no method '{method}' matching the call"),
            ));
        }
    }

    if let Some(sub) = scope.module.modules.get(qualifier) {
        if sub.find_function(method, &arg_types).is_some() {
            return Ok(ResolvedCall {
                function_name: method.to_string(),
                signature: arg_types,
                owning_module: sub.name.clone(),
                owning_struct: None,
                implicit_receiver: false,
            });
        }
        return Err(CheckError::name(
            line,
            format!("module '{qualifier}' has no function '{method}' with signature ({})", describe(&arg_types)),
        ));
    }

    Err(CheckError::name(line, format!("'{qualifier}' is not a struct, variable, or module")))
}

fn find_return_type(resolved: &ResolvedCall, current: &Module) -> Option<TypeExpr> {
    let home = if resolved.owning_module == current.name {
        Some(current)
    } else {
        current.modules.get(&resolved.owning_module)
    };
    let home = home?;

    if let Some(struct_name) = &resolved.owning_struct {
        let decl = home.find_struct(struct_name)?;
        return decl
            .methods
            .iter()
            .find(|m| m.head.name == resolved.function_name && m.head.param_types() == resolved.signature)
            .and_then(|m| m.head.return_type.clone());
    }
    home.find_function(&resolved.function_name, &resolved.signature)
        .and_then(|f| f.return_type().cloned())
}

fn describe(types: &[TypeExpr]) -> String {
    types.iter().map(TypeExpr::canonical).collect::<Vec<_>>().join(", ")
}
