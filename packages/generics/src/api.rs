//! Names of the Quill rendering runtime that generated code calls into

/// Substituted for type parameters that cannot be inferred, keeping the
/// generated code well-formed for error recovery
pub const FALLBACK_TYPE: &str = "object";

/// Root-scope qualifier. Synthesized methods live in a separate namespace,
/// so external type names must resolve from the root; bare type-parameter
/// names must never receive it.
pub const GLOBAL_PREFIX: &str = "global::";

/// Root of the synthetic namespace shared by all synthesized methods of a
/// compilation
pub const SYNTHETIC_NAMESPACE_ROOT: &str = "__Quill";

/// Class holding all inference methods of one document
pub const TYPE_INFERENCE_CLASS: &str = "TypeInference";

pub mod render_tree_builder {
    pub const FULL_TYPE_NAME: &str = "Quill.Rendering.RenderTreeBuilder";
    pub const OPEN_COMPONENT: &str = "OpenComponent";
    pub const ADD_ATTRIBUTE: &str = "AddAttribute";
    pub const ADD_COMPONENT_REFERENCE_CAPTURE: &str = "AddComponentReferenceCapture";
    pub const ADD_ELEMENT_REFERENCE_CAPTURE: &str = "AddElementReferenceCapture";
    pub const CLOSE_COMPONENT: &str = "CloseComponent";
}

pub mod element_ref {
    pub const FULL_TYPE_NAME: &str = "Quill.Rendering.ElementRef";
}
