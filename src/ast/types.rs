//! Type expressions.
//!
//! A type expression is either a bare name or a name applied to a parameter
//! list. The `@` subtype syntax (`ptr@Foo`) and the `[...]` generic syntax
//! (`Box[int]`) both produce the applied form but are kept distinguishable
//! so the compiler can reproduce each one's canonical textual form (see
//! design notes: `name`, `name@sub`, or `name_T1_T2`).

use std::fmt;

/// A type expression as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A bare name: `int`, `Point`, `any`, ...
    Name(String),
    /// `name[p1, p2, ...]` - a generic instantiation.
    Generic { name: String, params: Vec<TypeExpr> },
    /// `name@inner` - a subtype/pointer annotation.
    Subtype { name: String, inner: Box<TypeExpr> },
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Self {
        TypeExpr::Name(name.into())
    }

    pub fn generic(name: impl Into<String>, params: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic {
            name: name.into(),
            params,
        }
    }

    pub fn subtype(name: impl Into<String>, inner: TypeExpr) -> Self {
        TypeExpr::Subtype {
            name: name.into(),
            inner: Box::new(inner),
        }
    }

    /// The primary name of this type expression, ignoring any parameters.
    pub fn head_name(&self) -> &str {
        match self {
            TypeExpr::Name(n) => n,
            TypeExpr::Generic { name, .. } => name,
            TypeExpr::Subtype { name, .. } => name,
        }
    }

    /// `true` when this is a bare pointer-family type: `ptr` itself or a
    /// `ptr@Inner` subtype, both of which dot-access as `->` in C.
    pub fn is_pointer_like(&self) -> bool {
        self.head_name() == "ptr"
    }

    /// The canonical textual form used for signature/overload comparisons
    /// and for name mangling: `name`, `name@sub`, or `name_T1_T2`.
    pub fn canonical(&self) -> String {
        match self {
            TypeExpr::Name(n) => n.clone(),
            TypeExpr::Subtype { name, inner } => format!("{name}@{}", inner.canonical()),
            TypeExpr::Generic { name, params } => {
                let joined: Vec<String> = params.iter().map(TypeExpr::canonical).collect();
                format!("{name}_{}", joined.join("_"))
            }
        }
    }

    /// Structural/canonical equality with the special rule that `any`
    /// matches every type (used for generic parameter positions).
    pub fn matches(&self, other: &TypeExpr) -> bool {
        if self.head_name() == "any" || other.head_name() == "any" {
            return true;
        }
        match (self, other) {
            (TypeExpr::Name(a), TypeExpr::Name(b)) => a == b,
            (
                TypeExpr::Generic { name: n1, params: p1 },
                TypeExpr::Generic { name: n2, params: p2 },
            ) => n1 == n2 && p1.len() == p2.len() && p1.iter().zip(p2).all(|(a, b)| a.matches(b)),
            (
                TypeExpr::Subtype { name: n1, inner: i1 },
                TypeExpr::Subtype { name: n2, inner: i2 },
            ) => n1 == n2 && i1.matches(i2),
            // A generic instantiation's outer generic matches a Let's
            // declared generic type even without comparing every parameter
            // (used for `let` annotation checking against a fresh struct
            // literal's outer generic tag).
            _ => false,
        }
    }

    /// Compares only the outer generic name, ignoring parameters - used when
    /// checking a `let` annotation against a freshly-constructed generic
    /// value whose exact parameters aren't independently re-derived.
    pub fn outer_matches(&self, other: &TypeExpr) -> bool {
        self.head_name() == "any" || other.head_name() == "any" || self.head_name() == other.head_name()
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_of_bare_name() {
        assert_eq!(TypeExpr::name("int").canonical(), "int");
    }

    #[test]
    fn canonical_form_of_generic() {
        let ty = TypeExpr::generic("Box", vec![TypeExpr::name("int"), TypeExpr::name("float")]);
        assert_eq!(ty.canonical(), "Box_int_float");
    }

    #[test]
    fn canonical_form_of_subtype() {
        let ty = TypeExpr::subtype("ptr", TypeExpr::name("Foo"));
        assert_eq!(ty.canonical(), "ptr@Foo");
    }

    #[test]
    fn any_matches_everything() {
        assert!(TypeExpr::name("any").matches(&TypeExpr::name("int")));
        assert!(TypeExpr::name("int").matches(&TypeExpr::name("any")));
    }

    #[test]
    fn distinct_names_do_not_match() {
        assert!(!TypeExpr::name("int").matches(&TypeExpr::name("float")));
    }

    #[test]
    fn pointer_like_detects_ptr_and_subtype() {
        assert!(TypeExpr::name("ptr").is_pointer_like());
        assert!(TypeExpr::subtype("ptr", TypeExpr::name("Foo")).is_pointer_like());
        assert!(!TypeExpr::name("int").is_pointer_like());
    }
}
