//! Per-module emission: constants, enums, structs, and functions, walked
//! post-order over the sub-module tree so every dependency is forward-
//! declared before anything that calls into it.

use std::collections::{HashMap, HashSet};

use crate::ast::{FunctionDeclaration, StructDeclaration, TypeExpr};
use crate::semantic::{FunctionEntry, Module};

use super::expr::emit_expr;
use super::mangle::mangle_declaration;
use super::module_types::c_type_name;
use super::stmt::emit_body;

/// Emits `module` and everything it transitively imports, each module at
/// most once (guarded by `compiled`), leaves first.
pub fn emit_module(module: &Module, compiled: &mut HashSet<String>, out: &mut String) {
    if !compiled.insert(module.name.clone()) {
        return;
    }

    let mut imported: Vec<&Module> = module.modules.values().collect();
    imported.sort_by(|a, b| a.name.cmp(&b.name));
    for sub in imported {
        emit_module(sub, compiled, out);
    }

    emit_constants(module, out);
    emit_enums(module, out);
    emit_structs(module, out);
    emit_functions(module, out);
}

fn emit_constants(module: &Module, out: &mut String) {
    let mut names: Vec<&String> = module.constants.keys().collect();
    names.sort();
    for name in names {
        if let Some(value) = module.constant_values.get(name) {
            let locals = HashMap::new();
            out.push_str(&format!("#define {name} {}\n", emit_expr(value, module, &locals)));
        }
    }
}

fn emit_enums(module: &Module, out: &mut String) {
    let mut names: Vec<&String> = module.enums.keys().collect();
    names.sort();
    for name in names {
        let decl = &module.enums[name];
        let members: Vec<String> = decl.members.iter().map(|m| format!("{name}_{}", m.name)).collect();
        out.push_str(&format!("typedef enum {{ {} }} {name};\n", members.join(", ")));
    }
}

fn emit_structs(module: &Module, out: &mut String) {
    let mut names: Vec<&String> = module.structs.keys().collect();
    names.sort();
    for name in names {
        let decl = &module.structs[name];
        emit_struct_typedef(name, decl, out);
        for method in &decl.methods {
            emit_function(module, Some(name), method, out);
        }
    }
}

fn emit_struct_typedef(name: &str, decl: &StructDeclaration, out: &mut String) {
    let members: Vec<String> = decl
        .members
        .iter()
        .map(|m| format!("{} {};", c_type_name(&m.ty), m.name))
        .collect();
    out.push_str(&format!("typedef struct {{ {} }} {name};\n", members.join(" ")));
}

fn emit_functions(module: &Module, out: &mut String) {
    let mut names: Vec<&String> = module.functions.keys().collect();
    names.sort();
    for name in names {
        let mut overloads: Vec<&FunctionEntry> = module.functions[name].values().collect();
        overloads.sort_by_key(|e| Module::signature_key(&e.param_types()));
        for entry in overloads {
            if let FunctionEntry::Declared(decl) = entry {
                emit_function(module, None, decl, out);
            }
        }
    }
}

fn emit_function(module: &Module, owning_struct: Option<&str>, decl: &FunctionDeclaration, out: &mut String) {
    let owning_module = decl.head.owning_module.borrow().clone().unwrap_or_else(|| module.name.clone());
    let mangled = mangle_declaration(
        module,
        &owning_module,
        owning_struct,
        &decl.head.name,
        &decl.head.param_types(),
    );
    let return_ty = decl.head.return_type.clone().unwrap_or_else(|| TypeExpr::name("void"));
    let params: Vec<String> = decl
        .head
        .params
        .iter()
        .map(|p| format!("{} {}", c_type_name(&p.ty), p.name))
        .collect();

    let mut locals: HashMap<String, TypeExpr> = decl.head.params.iter().map(|p| (p.name.clone(), p.ty.clone())).collect();
    let body = emit_body(&decl.body, module, &mut locals, 0);

    out.push_str(&format!("{} {mangled}({}) {body}\n", c_type_name(&return_ty), params.join(", ")));
}
