//! # Quill Type-Name Model
//!
//! Syntactic representation of the type references that flow through the
//! Quill compiler: bindable property types, explicit type arguments and
//! component type names.
//!
//! ## Features
//!
//! - **Parsing**: logos-lexed, recursive-descent parsed `TypeExpr` tree
//! - **Stable re-serialization**: `Display` round-trips an unmodified tree
//! - **Substitution**: recursive identifier replacement through generic
//!   argument lists
//! - **Cover scanning**: enumerate the generic-argument texts a
//!   type-parameter inference scan should consider

pub mod error;
pub mod expr;
pub mod lexer;
pub mod parser;

// Re-export main types for convenience
pub use error::{TypeNameError, TypeNameResult};
pub use expr::TypeExpr;
pub use parser::parse_type_name;
