//! Fatal errors for the generics pass
//!
//! These are upstream-contract violations, not user mistakes: user-facing
//! findings are diagnostics on the tree, while these abort the pass for the
//! document.

use quill_typename::TypeNameError;
use thiserror::Error;

/// Result type for the generics pass
pub type PassResult<T> = Result<T, PassError>;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("Type argument '{name}' does not match a declared type parameter of component '{component}'")]
    UndeclaredTypeParameter { component: String, name: String },

    #[error("'{attribute}' on component '{component}' references undeclared property '{property}'")]
    UnknownBoundProperty {
        component: String,
        attribute: String,
        property: String,
    },

    #[error("Invalid type name '{type_name}' on component '{component}'")]
    InvalidTypeName {
        component: String,
        type_name: String,
        #[source]
        source: TypeNameError,
    },
}
