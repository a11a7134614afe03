//! Abstract syntax tree for Greek programs.
//!
//! The tree is built once by the parser and then shared: the checker
//! decorates certain nodes in place (call resolutions, owning-struct and
//! owning-module back-references) through `RefCell` fields rather than
//! rebuilding or re-walking the tree with an owning pass.

pub mod expr;
pub mod program;
pub mod stmt;
pub mod types;

pub use expr::{BinaryOp, Expr, ExprKind, Literal, ResolvedCall};
pub use program::{
    EnumDeclaration, EnumMember, ExternDeclaration, FunctionDeclaration, FunctionHead,
    ImportDeclaration, LetDeclaration, Param, Program, StructDeclaration, StructMember, TopLevel,
};
pub use stmt::{AssignOp, Stmt, StmtKind};
pub use types::TypeExpr;
