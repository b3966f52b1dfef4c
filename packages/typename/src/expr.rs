//! Type-expression tree
//!
//! An immutable-once-parsed representation of type references. Three forms
//! cover everything the component lowering produces for bindable property
//! types: a simple identifier, a dotted qualified name, and a generic
//! instantiation with a nested argument list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A parsed type reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// Simple identifier: `TItem`, `string`
    Identifier(String),

    /// Qualified name with two or more parts: `System.Collections.Generic.List`
    Qualified(Vec<String>),

    /// Generic instantiation: `Dictionary<string, TItem>`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
}

impl TypeExpr {
    /// All texts a type-parameter cover scan should consider: the whole
    /// expression when it is a bare identifier, plus the serialized text of
    /// every argument of every generic argument list at any depth.
    ///
    /// `Dictionary<string, List<TItem>>` yields `string`, `List<TItem>`
    /// and `TItem`; a bare `TItem` yields just itself.
    pub fn generic_argument_candidates(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let TypeExpr::Identifier(name) = self {
            out.push(name.clone());
        }
        self.collect_argument_texts(&mut out);
        out
    }

    fn collect_argument_texts(&self, out: &mut Vec<String>) {
        if let TypeExpr::Generic { args, .. } = self {
            for arg in args {
                out.push(arg.to_string());
                arg.collect_argument_texts(out);
            }
        }
    }

    /// Replace every identifier that matches a key in `bindings` with the
    /// bound expression, recursively through generic argument lists.
    /// Identifiers matching no key are left unchanged.
    pub fn substitute(&self, bindings: &HashMap<String, TypeExpr>) -> TypeExpr {
        match self {
            TypeExpr::Identifier(name) => bindings
                .get(name)
                .cloned()
                .unwrap_or_else(|| self.clone()),
            TypeExpr::Qualified(_) => self.clone(),
            TypeExpr::Generic { base, args } => TypeExpr::Generic {
                base: Box::new(base.substitute(bindings)),
                args: args.iter().map(|arg| arg.substitute(bindings)).collect(),
            },
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Identifier(name) => write!(f, "{}", name),
            TypeExpr::Qualified(parts) => write!(f, "{}", parts.join(".")),
            TypeExpr::Generic { base, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
                write!(f, "{}<{}>", base, args.join(", "))
            }
        }
    }
}
