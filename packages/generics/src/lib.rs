//! # Quill Generic Component Pass
//!
//! Resolves generic type parameters for component usages and synthesizes the
//! call-site inference methods that let the host C# compiler fill in the
//! concrete types.
//!
//! ## How it works
//!
//! - With explicit type arguments, the pass validates completeness and
//!   rewrites every type name on the usage to the supplied types.
//! - Without them, it checks that the supplied attribute/child-content
//!   values cover every declared parameter, then emits a uniquely named
//!   generic method per call site whose argument types mirror the values
//!   passed. Calling that method without type arguments makes C# method
//!   type inference deduce the component's type arguments from the static
//!   types of the arguments, left to right; the pass never re-implements
//!   inference itself.
//! - Parameters that cannot be covered degrade to `object` with a
//!   diagnostic, so downstream code generation stays well-formed and the
//!   author sees one clear error instead of a cascade.

pub mod api;
pub mod bindings;
pub mod error;
pub mod pass;
pub mod rewrite;
pub mod synthesize;
pub mod writer;

// Re-export main types for convenience
pub use bindings::{Binding, BindingState, BindingTable};
pub use error::{PassError, PassResult};
pub use pass::GenericComponentPass;
pub use writer::CodeWriter;
