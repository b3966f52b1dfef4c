//! # Quill Intermediate Tree
//!
//! The lowered document tree that Quill's optimization passes operate on,
//! together with the diagnostics model and a mutable visitor.
//!
//! Earlier passes parse templates and resolve component tags; later passes
//! (this workspace's `quill-generics` among them) mutate the tree in place;
//! the emission stage prints the final code. Spans survive the whole way for
//! precise error reporting.

pub mod ast;
pub mod diagnostics;
pub mod visitor;

// Re-export main types for convenience
pub use ast::{
    AttributeUse, AttributeValue, BoundProperty, BuilderCall, CaptureUse, ChildContentUse,
    ComponentDeclaration, ComponentNode, Document, InferenceContainer, Node, ParameterSlot,
    PropertyKind, Span, TypeArgumentUse, TypeInferenceMethodNode, TypeInferenceRef,
    TypeParameter,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use visitor::VisitorMut;
