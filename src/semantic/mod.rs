//! The checker: walks a parsed program, builds its `Module` symbol table,
//! validates type rules, and recursively checks imports.
//!
//! # Module Structure
//!
//! - [`error`] - the `CheckError` taxonomy
//! - [`module`] - the `Module` symbol table and the `SourceLoader` seam
//! - `expr` - expression type inference
//! - `calls` - call-site overload resolution
//! - `stmt` - statement and body checking

mod calls;
mod error;
mod expr;
pub(crate) mod module;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::CheckError;
pub use expr::{type_of, Scope};
pub use module::{FsLoader, FunctionEntry, Module, SourceLoader};

use std::collections::{HashMap, HashSet};

use crate::ast::{FunctionDeclaration, Param, Program, StructDeclaration, TopLevel, TypeExpr};
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Drives the checker across a whole-program import graph.
pub struct Checker {
    /// Modules currently on the import path from the entry file (cycle
    /// detection): present while a module's own imports are being checked,
    /// removed once it completes.
    in_progress: HashSet<String>,
    /// Fully-checked modules, keyed by dotted path, so a module imported
    /// by more than one importer is only checked once.
    completed: HashMap<String, Module>,
}

impl Checker {
    pub fn new() -> Self {
        Checker {
            in_progress: HashSet::new(),
            completed: HashMap::new(),
        }
    }

    /// Checks the program rooted at `dotted_path`, loading and recursively
    /// checking every transitively imported module. `dotted_path` is the
    /// entry module's own qualified name (conventionally its file stem).
    ///
    /// Cycle detection and the completed-module cache both key off
    /// `dotted_path`, so this is safe to call directly for the entry module
    /// and is also what imports recurse through: an import of a path that
    /// is still being checked (including the entry importing itself) is
    /// caught here, while a module reached by more than one importer
    /// (a diamond, not a cycle) is only ever checked once.
    pub fn check_program(
        &mut self,
        dotted_path: &str,
        source: &str,
        loader: &dyn SourceLoader,
    ) -> Result<Module, CheckError> {
        if let Some(module) = self.completed.get(dotted_path) {
            return Ok(module.clone());
        }
        if !self.in_progress.insert(dotted_path.to_string()) {
            return Err(CheckError::recursion(0, format!("recursive import of '{dotted_path}'")));
        }
        let outcome = Lexer::new(source)
            .tokenize()
            .map_err(CheckError::from)
            .and_then(|tokens| Parser::new(tokens).parse().map_err(CheckError::from))
            .and_then(|program| self.check_parsed(dotted_path, &program, loader));
        self.in_progress.remove(dotted_path);
        let module = outcome?;
        self.completed.insert(dotted_path.to_string(), module.clone());
        Ok(module)
    }

    fn check_imported(&mut self, dotted_path: &str, loader: &dyn SourceLoader) -> Result<(), CheckError> {
        let source = loader.load(dotted_path)?;
        self.check_program(dotted_path, &source, loader).map(|_| ())
    }

    fn check_parsed(
        &mut self,
        dotted_path: &str,
        program: &Program,
        loader: &dyn SourceLoader,
    ) -> Result<Module, CheckError> {
        let mut module = Module::new(dotted_path);

        for item in &program.items {
            match item {
                TopLevel::Comment(_) => {}
                TopLevel::Import(import) => {
                    self.check_imported(&import.path, loader)?;
                    let imported = self.completed.get(&import.path).expect("import just completed").clone();
                    module.modules.insert(import.path.clone(), imported);
                }
                TopLevel::Extern(decl) => {
                    module.register_function(FunctionEntry::Extern(decl.clone()), decl.head.line)?;
                }
                TopLevel::Function(decl) => self.check_function(decl, &mut module)?,
                TopLevel::Struct(decl) => self.check_struct(decl, &mut module)?,
                TopLevel::Enum(decl) => module.register_enum(decl.clone())?,
                TopLevel::Let(decl) => {
                    let value_ty = {
                        let mut locals = HashMap::new();
                        let mut scope = expr::Scope { module: &module, locals: &mut locals };
                        expr::type_of(&decl.value, &mut scope)?
                    };
                    let declared = match &decl.ty {
                        Some(ty) => {
                            if !ty.matches(&value_ty) && !ty.outer_matches(&value_ty) {
                                return Err(CheckError::ty(
                                    decl.line,
                                    format!("let '{}' declared as '{ty}' but value has type '{value_ty}'", decl.name),
                                ));
                            }
                            ty.clone()
                        }
                        None => value_ty,
                    };
                    if module.variables.contains_key(&decl.name) || module.constants.contains_key(&decl.name) {
                        return Err(CheckError::name(decl.line, format!("'{}' is already declared", decl.name)));
                    }
                    module.constants.insert(decl.name.clone(), declared);
                    module.constant_values.insert(decl.name.clone(), decl.value.clone());
                }
            }
        }

        Ok(module)
    }

    fn check_function(&self, decl: &FunctionDeclaration, module: &mut Module) -> Result<(), CheckError> {
        module.register_function(FunctionEntry::Declared(decl.clone()), decl.head.line)?;
        *decl.head.owning_module.borrow_mut() = Some(module.name.clone());
        let mut locals = bind_params(&decl.head.params);
        stmt::check_body(&decl.body, module, &mut locals, decl.head.return_type.as_ref())
    }

    fn check_struct(&self, decl: &StructDeclaration, module: &mut Module) -> Result<(), CheckError> {
        if let TypeExpr::Generic { params, .. } = &decl.ty {
            for type_var in params {
                let var_name = type_var.head_name();
                let used = decl.members.iter().any(|m| type_mentions(&m.ty, var_name));
                if !used {
                    return Err(CheckError::value(
                        decl.line,
                        format!("generic type variable '{var_name}' is declared but never used in a member"),
                    ));
                }
            }
        }

        let struct_name = decl.ty.head_name().to_string();
        for method in &decl.methods {
            *method.head.owning_struct.borrow_mut() = Some(struct_name.clone());
            *method.head.owning_module.borrow_mut() = Some(module.name.clone());
            let mut locals = bind_params(&method.head.params);
            stmt::check_body(&method.body, module, &mut locals, method.head.return_type.as_ref())?;
        }

        module.register_struct(decl.clone())
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

fn bind_params(params: &[Param]) -> HashMap<String, TypeExpr> {
    params.iter().map(|p| (p.name.clone(), p.ty.clone())).collect()
}

fn type_mentions(ty: &TypeExpr, name: &str) -> bool {
    match ty {
        TypeExpr::Name(n) => n == name,
        TypeExpr::Subtype { name: n, inner } => n == name || type_mentions(inner, name),
        TypeExpr::Generic { name: n, params } => n == name || params.iter().any(|p| type_mentions(p, name)),
    }
}
