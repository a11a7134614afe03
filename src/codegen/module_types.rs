//! Mapping from a source type expression to the C type token it emits as.
//!
//! `str`, `any`, and `ptr` are aliased to `char*` by the preamble's
//! `#define`s, so their C token is just their own name; subtype-carrying
//! pointers (`ptr@Foo`) collapse to the same `ptr` token since the `@Foo`
//! annotation has no representation at the C level. Generic instantiations
//! mangle into their canonical underscore-joined form, matching how struct
//! names are emitted by the `typedef struct` that declares them.

use crate::ast::TypeExpr;

pub fn c_type_name(ty: &TypeExpr) -> String {
    if ty.is_pointer_like() {
        return "ptr".to_string();
    }
    match ty {
        TypeExpr::Name(n) => n.clone(),
        TypeExpr::Generic { name, params } if params.is_empty() => name.clone(),
        TypeExpr::Generic { name, params } => {
            let joined: Vec<String> = params.iter().map(c_type_name).collect();
            format!("{name}_{}", joined.join("_"))
        }
        TypeExpr::Subtype { name, inner } => format!("{name}_{}", c_type_name(inner)),
    }
}
