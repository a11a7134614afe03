//! Name mangling: turns a resolved call's function identity (or a
//! declaration's own identity) into the C identifier the compiler emits
//! for it.

use crate::ast::{ResolvedCall, TypeExpr};

use super::module_types::c_type_name;
use crate::semantic::{FunctionEntry, Module};

/// Looks up the module that owns a resolved call, relative to the module
/// currently being emitted (calls only ever target the emitting module
/// itself or one of its direct imports, mirroring how the checker resolved
/// them in the first place).
pub fn home_module<'a>(module: &'a Module, owning: &str) -> &'a Module {
    if owning == module.name {
        module
    } else {
        module
            .modules
            .get(owning)
            .unwrap_or_else(|| panic!("resolved call names unreachable module '{owning}'"))
    }
}

/// The C identifier to call for a resolved call site. `extern` functions
/// keep their declared name verbatim (they're provided by the C ecosystem
/// at link time); everything else goes through name mangling.
pub fn callee_name(module: &Module, resolved: &ResolvedCall) -> String {
    if resolved.owning_struct.is_none() {
        let home = home_module(module, &resolved.owning_module);
        if let Some(FunctionEntry::Extern(_)) = home.find_function(&resolved.function_name, &resolved.signature) {
            return resolved.function_name.clone();
        }
    }
    mangle_function(module, resolved)
}

pub fn mangle_function(module: &Module, resolved: &ResolvedCall) -> String {
    mangle(
        module,
        &resolved.owning_module,
        resolved.owning_struct.as_deref(),
        &resolved.function_name,
        &resolved.signature,
    )
}

/// Mangles a function's own declared identity (used when emitting its
/// definition, as opposed to a call site referring to it).
pub fn mangle_declaration(
    module: &Module,
    owning_module: &str,
    owning_struct: Option<&str>,
    name: &str,
    signature: &[TypeExpr],
) -> String {
    mangle(module, owning_module, owning_struct, name, signature)
}

fn mangle(module: &Module, owning_module: &str, owning_struct: Option<&str>, name: &str, signature: &[TypeExpr]) -> String {
    if name == "main" {
        return "main".to_string();
    }
    let home = home_module(module, owning_module);
    let overloaded = match owning_struct {
        Some(struct_name) => home
            .find_struct(struct_name)
            .map(|d| d.methods.iter().filter(|m| m.head.name == name).count() > 1)
            .unwrap_or(false),
        None => home.functions.get(name).map(|overloads| overloads.len() > 1).unwrap_or(false),
    };
    let mut mangled = match owning_struct {
        Some(struct_name) => format!("{struct_name}__{name}"),
        None => format!("{}__{name}", owning_module.replace('.', "__")),
    };
    if overloaded {
        mangled.push_str("__");
        mangled.push_str(&signature.iter().map(c_type_name).collect::<Vec<_>>().join("_"));
    }
    mangled
}
