//! Expression nodes.

use std::cell::RefCell;

use crate::ast::types::TypeExpr;
use crate::token::Span;

/// A resolved call target, attached to a `Call` node by the checker once
/// overload resolution has picked a concrete function. This is a *weak*
/// reference: a handle into the module tree (by name and signature), not
/// an owning pointer to the function it names. Stored behind a `RefCell`
/// so the checker can decorate an already-built, shared AST without
/// needing mutable access to the whole tree. Name mangling from this
/// handle into a concrete C identifier happens later, in the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall {
    /// The unmangled name of the function this call resolves to.
    pub function_name: String,
    /// The resolved argument-type tuple (includes a prepended receiver type
    /// for implicit-receiver method calls).
    pub signature: Vec<TypeExpr>,
    /// Dotted qualified name of the module declaring the function.
    pub owning_module: String,
    /// Name of the struct this is a method of, if any.
    pub owning_struct: Option<String>,
    /// `true` when this call is a method call through an implicit `self`
    /// receiver (the receiver expression is prepended as the first C arg).
    pub implicit_receiver: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    BitAnd,
    BitOr,
    BitXor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A bare identifier reference: a variable, a constant, a function, a
    /// struct, or an enum name used as a value.
    Name(String),
    Literal(Literal),
    /// `(inner)` - kept as its own node so the compiler can reproduce the
    /// parentheses in the emitted C when precedence demands it.
    Parenthesized(Box<Expr>),
    BinaryOperation {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    /// `head.name` - a member access, postfix on any expression.
    Dot { head: Box<Expr>, name: String },
    /// `head[args]` before disambiguation: could turn out to be a generic
    /// instantiation (`Box[int]`) or an index expression (`arr[0]`). The
    /// checker resolves which one this is once it knows `head`'s kind.
    Item { head: Box<Expr>, args: Vec<Expr> },
    /// `head(args)` - only legal when `head` is a `Name` or a `Dot`.
    Call {
        head: Box<Expr>,
        args: Vec<Expr>,
        resolution: RefCell<Option<ResolvedCall>>,
    },
    /// `Type { field: value, ... }` - a struct literal.
    Struct {
        ty: TypeExpr,
        fields: Vec<(String, Expr)>,
    },
    /// `[e1, e2, ...]` - an array literal.
    Array(Vec<Expr>),
}

impl ExprKind {
    pub fn call(head: Expr, args: Vec<Expr>) -> Self {
        ExprKind::Call {
            head: Box::new(head),
            args,
            resolution: RefCell::new(None),
        }
    }
}
