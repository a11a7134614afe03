//! Top-level declarations and the program root.

use std::cell::RefCell;

use crate::ast::expr::Expr;
use crate::ast::stmt::Stmt;
use crate::ast::types::TypeExpr;
use crate::token::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    pub line: usize,
}

/// A function's signature: name, parameters, and return type. Shared between
/// free functions and struct methods; the checker fills in which struct or
/// module owns it once the declaration has been placed in a symbol table.
#[derive(Debug, Clone)]
pub struct FunctionHead {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<TypeExpr>,
    pub line: usize,
    /// Set by the checker when this function is a method on a struct.
    pub owning_struct: RefCell<Option<String>>,
    /// Set by the checker to the dotted module path this function lives in.
    pub owning_module: RefCell<Option<String>>,
}

impl PartialEq for FunctionHead {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.return_type == other.return_type
    }
}

impl FunctionHead {
    pub fn new(name: String, params: Vec<Param>, return_type: Option<TypeExpr>, line: usize) -> Self {
        FunctionHead {
            name,
            params,
            return_type,
            line,
            owning_struct: RefCell::new(None),
            owning_module: RefCell::new(None),
        }
    }

    /// The canonical parameter-type tuple used as part of an overload key.
    pub fn param_types(&self) -> Vec<TypeExpr> {
        self.params.iter().map(|p| p.ty.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructMember {
    pub name: String,
    pub ty: TypeExpr,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub head: FunctionHead,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub ty: TypeExpr,
    pub members: Vec<StructMember>,
    pub methods: Vec<FunctionDeclaration>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetDeclaration {
    pub name: String,
    pub ty: Option<TypeExpr>,
    pub value: Expr,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternDeclaration {
    pub head: FunctionHead,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// Dotted module path as written, e.g. `std.io` or `foo.bar.baz`.
    pub path: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Import(ImportDeclaration),
    Extern(ExternDeclaration),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Let(LetDeclaration),
    /// A top-level comment, carried through for fidelity but otherwise
    /// inert - the checker and compiler both skip over it.
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub items: Vec<TopLevel>,
}

impl Program {
    pub fn new(items: Vec<TopLevel>) -> Self {
        Program { items }
    }
}
