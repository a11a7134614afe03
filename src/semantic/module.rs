//! The `Module` symbol table and the source-loading seam used to resolve
//! imports.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::ast::{EnumDeclaration, Expr, ExternDeclaration, FunctionDeclaration, StructDeclaration, TypeExpr};

use super::error::CheckError;

/// A registered function overload: either a user-defined function with a
/// body, or an `extern` declaration provided at link time.
#[derive(Debug, Clone)]
pub enum FunctionEntry {
    Declared(FunctionDeclaration),
    Extern(ExternDeclaration),
}

impl FunctionEntry {
    pub fn return_type(&self) -> Option<&TypeExpr> {
        match self {
            FunctionEntry::Declared(f) => f.head.return_type.as_ref(),
            FunctionEntry::Extern(e) => e.head.return_type.as_ref(),
        }
    }

    pub fn param_types(&self) -> Vec<TypeExpr> {
        match self {
            FunctionEntry::Declared(f) => f.head.param_types(),
            FunctionEntry::Extern(e) => e.head.param_types(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FunctionEntry::Declared(f) => &f.head.name,
            FunctionEntry::Extern(e) => &e.head.name,
        }
    }
}

/// The hierarchical symbol table built by the checker for one `.greek`
/// source file. Overloads of the same function name are keyed by the
/// canonical textual form of their parameter-type tuple (see
/// `TypeExpr::canonical`), joined with `,`.
#[derive(Debug, Default, Clone)]
pub struct Module {
    pub name: String,
    pub modules: HashMap<String, Module>,
    pub variables: HashMap<String, TypeExpr>,
    pub constants: HashMap<String, TypeExpr>,
    /// The value expression behind each entry in `constants`, kept
    /// alongside the type so the compiler can emit `#define NAME VALUE`
    /// without re-deriving it from the original declaration.
    pub constant_values: HashMap<String, Expr>,
    pub structs: HashMap<String, StructDeclaration>,
    pub enums: HashMap<String, EnumDeclaration>,
    pub functions: HashMap<String, HashMap<String, FunctionEntry>>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            ..Module::default()
        }
    }

    pub fn signature_key(types: &[TypeExpr]) -> String {
        types.iter().map(TypeExpr::canonical).collect::<Vec<_>>().join(",")
    }

    /// Registers a function overload. Returns an error if this exact
    /// parameter-type tuple is already registered for this name (I2).
    pub fn register_function(&mut self, entry: FunctionEntry, line: usize) -> Result<(), CheckError> {
        let name = entry.name().to_string();
        let key = Module::signature_key(&entry.param_types());
        let overloads = self.functions.entry(name.clone()).or_default();
        if overloads.contains_key(&key) {
            return Err(CheckError::name(
                line,
                format!("function '{name}' already declared with this parameter signature"),
            ));
        }
        overloads.insert(key, entry);
        Ok(())
    }

    pub fn register_struct(&mut self, decl: StructDeclaration) -> Result<(), CheckError> {
        let name = decl.ty.head_name().to_string();
        if self.structs.contains_key(&name) {
            return Err(CheckError::name(decl.line, format!("struct '{name}' already declared")));
        }
        self.structs.insert(name, decl);
        Ok(())
    }

    pub fn register_enum(&mut self, decl: EnumDeclaration) -> Result<(), CheckError> {
        if self.enums.contains_key(&decl.name) {
            return Err(CheckError::name(decl.line, format!("enum '{}' already declared", decl.name)));
        }
        self.enums.insert(decl.name.clone(), decl);
        Ok(())
    }

    /// Finds a function overload in this module matching `signature` exactly.
    pub fn find_function(&self, name: &str, signature: &[TypeExpr]) -> Option<&FunctionEntry> {
        self.functions.get(name)?.get(&Module::signature_key(signature))
    }

    pub fn find_struct(&self, name: &str) -> Option<&StructDeclaration> {
        self.structs.get(name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumDeclaration> {
        self.enums.get(name)
    }
}

/// Reads the source text for a dotted module path. Separated from the
/// checker so tests can substitute an in-memory loader instead of touching
/// the filesystem.
pub trait SourceLoader {
    fn load(&self, dotted_path: &str) -> Result<String, CheckError>;
}

/// Reads `.greek` files from a root directory, mapping `a.b.c` to
/// `<root>/a/b/c.greek` per the language's module-path convention.
pub struct FsLoader {
    pub root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsLoader { root: root.into() }
    }

    pub fn path_for(&self, dotted_path: &str) -> PathBuf {
        let mut path: PathBuf = self.root.clone();
        for segment in dotted_path.split('.') {
            path.push(segment);
        }
        path.set_extension("greek");
        path
    }
}

impl SourceLoader for FsLoader {
    fn load(&self, dotted_path: &str) -> Result<String, CheckError> {
        let path: PathBuf = self.path_for(dotted_path);
        std::fs::read_to_string(&path).map_err(|e| CheckError::Io {
            message: format!("could not read module '{dotted_path}' at {}: {e}", path.display()),
        })
    }
}

/// An in-memory loader used by unit tests, keyed by dotted module path.
#[cfg(test)]
pub struct MapLoader {
    pub sources: HashMap<String, String>,
}

#[cfg(test)]
impl SourceLoader for MapLoader {
    fn load(&self, dotted_path: &str) -> Result<String, CheckError> {
        self.sources
            .get(dotted_path)
            .cloned()
            .ok_or_else(|| CheckError::Io { message: format!("no such module '{dotted_path}'") })
    }
}
