//! Intermediate document tree
//!
//! The lowered form of a template document that optimization passes operate
//! on. Nodes preserve source spans for diagnostics, carry the resolved
//! component metadata produced by earlier passes, and are mutated in place
//! (type names rewritten, synthesized artifacts attached) before the
//! emission stage prints code.

use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// Source location span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A declared generic type parameter on a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
}

/// How a bound property is supplied at a call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Attribute,
    ChildContent,
}

/// A declared input of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundProperty {
    pub name: String,
    /// Declared type as literal type text, full names already resolved
    pub type_name: String,
    pub kind: PropertyKind,
    /// Whether the declared type references any of the component's type parameters
    pub is_generic_typed: bool,
}

/// Resolved metadata for a component, produced by tag matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDeclaration {
    pub tag_name: String,
    /// Full type name; for generic components includes the parameter list,
    /// e.g. `MyApp.Repeater<TItem>`
    pub type_name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub properties: Vec<BoundProperty>,
}

impl ComponentDeclaration {
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    pub fn property(&self, name: &str) -> Option<&BoundProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Attribute value as it survives lowering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// An expression the emission stage prints verbatim
    Expression(String),
    /// Embedded procedural code, a legacy construct the compiler rejects
    CodeBlock(String),
}

/// One attribute supplied at a component call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeUse {
    pub name: String,
    /// Declared type copied onto the use; rewritten in place by passes
    pub type_name: Option<String>,
    /// Name of the matching declared property, if the attribute matched one
    pub bound_property: Option<String>,
    pub value: AttributeValue,
    pub span: Span,
}

/// One child-content block supplied at a component call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildContentUse {
    pub name: String,
    pub type_name: Option<String>,
    pub bound_property: Option<String>,
    pub children: Vec<Node>,
    pub span: Span,
}

/// A reference capture at a component call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureUse {
    /// Component capture vs. element capture
    pub is_component_capture: bool,
    pub type_name: Option<String>,
    pub span: Span,
}

/// An explicit type argument supplied at a component call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeArgumentUse {
    pub parameter_name: String,
    /// Literal type text; may be blank when the author left the value empty
    pub text: String,
    pub span: Span,
}

/// Invocation-shaped reference to a synthesized inference method, left on a
/// usage for the emission stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInferenceRef {
    pub method_name: String,
    pub full_type_name: String,
}

/// Which builder call a parameter slot turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderCall {
    AddAttribute,
    AddComponentReferenceCapture,
    AddElementReferenceCapture,
}

/// One value parameter of a synthesized inference method. Attributes, child
/// content and captures share this shape; captures have no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSlot {
    pub name: Option<String>,
    pub type_name: String,
    pub call: BuilderCall,
}

/// A synthesized inference method; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInferenceMethodNode {
    pub method_name: String,
    pub full_type_name: String,
    pub type_parameters: Vec<String>,
    /// Component type name to open, as rewritten at the call site
    pub component_type_name: String,
    pub slots: Vec<ParameterSlot>,
}

/// One component call site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub declaration: ComponentDeclaration,
    pub tag_name: String,
    /// Component type name for this usage; rewritten in place
    pub type_name: String,
    pub attributes: Vec<AttributeUse>,
    pub child_contents: Vec<ChildContentUse>,
    pub captures: Vec<CaptureUse>,
    pub type_arguments: Vec<TypeArgumentUse>,
    pub span: Span,
    pub diagnostics: Vec<Diagnostic>,
    pub type_inference: Option<TypeInferenceRef>,
}

/// Render tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element {
        tag: String,
        children: Vec<Node>,
        span: Span,
    },
    Component(ComponentNode),
    Text(String),
}

/// The synthetic namespace/class scaffold holding all inference methods of
/// one document; created lazily on the first qualifying usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceContainer {
    pub namespace: String,
    pub class_name: String,
    pub methods: Vec<TypeInferenceMethodNode>,
}

/// One lowered template document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub path: String,
    /// Primary namespace of the generated class; may be empty
    pub namespace: String,
    pub children: Vec<Node>,
    pub inference_container: Option<InferenceContainer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let merged = Span::new(4, 10).merge(Span::new(2, 8));
        assert_eq!(merged, Span::new(2, 10));
    }

    #[test]
    fn test_declaration_property_lookup() {
        let declaration = ComponentDeclaration {
            tag_name: "Repeater".to_string(),
            type_name: "MyApp.Repeater<TItem>".to_string(),
            type_parameters: vec![TypeParameter {
                name: "TItem".to_string(),
            }],
            properties: vec![BoundProperty {
                name: "Items".to_string(),
                type_name: "System.Collections.Generic.IEnumerable<TItem>".to_string(),
                kind: PropertyKind::Attribute,
                is_generic_typed: true,
            }],
        };

        assert!(declaration.is_generic());
        assert!(declaration.property("Items").is_some());
        assert!(declaration.property("Missing").is_none());
    }

    #[test]
    fn test_document_serde_round_trip() {
        let document = Document {
            path: "/src/Pages/Index.quill".to_string(),
            namespace: "MyApp.Pages".to_string(),
            children: vec![Node::Element {
                tag: "div".to_string(),
                children: vec![Node::Text("hello".to_string())],
                span: Span::new(0, 5),
            }],
            inference_container: None,
        };

        let json = serde_json::to_string(&document).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
