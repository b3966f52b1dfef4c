//! Inference-method synthesis
//!
//! For a component usage whose type arguments are left to inference, the
//! pass snapshots a uniquely named generic method whose invocation shape
//! makes the host C# compiler deduce the component's type arguments from
//! the static types of the values actually passed. This module builds the
//! parameter-slot snapshot and prints the method and its shared container.
//!
//! The shape, for a `Foo<T1, T2>` usage:
//!
//! ```text
//! public static void CreateFoo_0<T1, T2>(global::Quill.Rendering.RenderTreeBuilder builder, int seq, int __seq0, T1 __arg0, int __seq1, global::System.Collections.Generic.List<T2> __arg1)
//! {
//!     builder.OpenComponent<global::Foo<T1, T2>>(seq);
//!     builder.AddAttribute(__seq0, "Attr0", __arg0);
//!     builder.AddAttribute(__seq1, "Attr1", __arg1);
//!     builder.CloseComponent();
//! }
//! ```

use crate::api;
use crate::rewrite::qualify_type_name;
use crate::writer::CodeWriter;
use quill_ir::ast::{
    AttributeValue, BuilderCall, ComponentNode, InferenceContainer, ParameterSlot,
    TypeInferenceMethodNode,
};
use quill_ir::diagnostics;

/// Flatten a usage's attributes, child content and captures into the fixed
/// slot order of the synthesized method. Attributes, child content and
/// captures share one shape; captures are nameless and default to the
/// element reference type when no capture type is declared. An attribute
/// whose value is a code block gets a diagnostic and is skipped.
pub fn collect_parameter_slots(node: &mut ComponentNode) -> Vec<ParameterSlot> {
    let mut slots = Vec::new();

    let attributes = &node.attributes;
    let node_diagnostics = &mut node.diagnostics;
    for attribute in attributes {
        if let AttributeValue::CodeBlock(content) = &attribute.value {
            node_diagnostics.push(diagnostics::code_block_in_attribute(
                Some(attribute.span),
                content,
            ));
            continue;
        }
        slots.push(ParameterSlot {
            name: Some(attribute.name.clone()),
            type_name: attribute
                .type_name
                .clone()
                .unwrap_or_else(|| api::FALLBACK_TYPE.to_string()),
            call: BuilderCall::AddAttribute,
        });
    }

    for child_content in &node.child_contents {
        slots.push(ParameterSlot {
            name: Some(child_content.name.clone()),
            type_name: child_content
                .type_name
                .clone()
                .unwrap_or_else(|| api::FALLBACK_TYPE.to_string()),
            call: BuilderCall::AddAttribute,
        });
    }

    for capture in &node.captures {
        slots.push(ParameterSlot {
            name: None,
            type_name: capture
                .type_name
                .clone()
                .unwrap_or_else(|| api::element_ref::FULL_TYPE_NAME.to_string()),
            call: if capture.is_component_capture {
                BuilderCall::AddComponentReferenceCapture
            } else {
                BuilderCall::AddElementReferenceCapture
            },
        });
    }

    slots
}

fn builder_method(call: BuilderCall) -> &'static str {
    match call {
        BuilderCall::AddAttribute => api::render_tree_builder::ADD_ATTRIBUTE,
        BuilderCall::AddComponentReferenceCapture => {
            api::render_tree_builder::ADD_COMPONENT_REFERENCE_CAPTURE
        }
        BuilderCall::AddElementReferenceCapture => {
            api::render_tree_builder::ADD_ELEMENT_REFERENCE_CAPTURE
        }
    }
}

/// Print one synthesized inference method
pub fn write_type_inference_method(writer: &mut CodeWriter, method: &TypeInferenceMethodNode) {
    let mut signature = String::new();
    signature.push_str("public static void ");
    signature.push_str(&method.method_name);
    signature.push('<');
    signature.push_str(&method.type_parameters.join(", "));
    signature.push_str(">(");
    signature.push_str(api::GLOBAL_PREFIX);
    signature.push_str(api::render_tree_builder::FULL_TYPE_NAME);
    signature.push_str(" builder, int seq");
    for (index, slot) in method.slots.iter().enumerate() {
        signature.push_str(&format!(
            ", int __seq{}, {} __arg{}",
            index,
            qualify_type_name(&slot.type_name, &method.type_parameters),
            index
        ));
    }
    signature.push(')');
    writer.write_line(&signature);

    writer.write_line("{");
    writer.indent();
    writer.write_line(&format!(
        "builder.{}<{}{}>(seq);",
        api::render_tree_builder::OPEN_COMPONENT,
        api::GLOBAL_PREFIX,
        method.component_type_name
    ));
    for (index, slot) in method.slots.iter().enumerate() {
        let line = match &slot.name {
            Some(name) => format!(
                "builder.{}(__seq{}, \"{}\", __arg{});",
                builder_method(slot.call),
                index,
                name,
                index
            ),
            None => format!(
                "builder.{}(__seq{}, __arg{});",
                builder_method(slot.call),
                index,
                index
            ),
        };
        writer.write_line(&line);
    }
    writer.write_line(&format!(
        "builder.{}();",
        api::render_tree_builder::CLOSE_COMPONENT
    ));
    writer.dedent();
    writer.write_line("}");
}

/// Print a document's synthetic namespace/class scaffold with every method
/// synthesized for the document
pub fn write_inference_container(writer: &mut CodeWriter, container: &InferenceContainer) {
    writer.write_line(&format!("namespace {}", container.namespace));
    writer.write_line("{");
    writer.indent();
    writer.write_line(&format!("internal static class {}", container.class_name));
    writer.write_line("{");
    writer.indent();
    for method in &container.methods {
        write_type_inference_method(writer, method);
    }
    writer.dedent();
    writer.write_line("}");
    writer.dedent();
    writer.write_line("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_ir::ast::{AttributeUse, CaptureUse, ComponentDeclaration, Span};
    use quill_ir::DiagnosticKind;

    fn usage() -> ComponentNode {
        ComponentNode {
            declaration: ComponentDeclaration {
                tag_name: "Repeater".to_string(),
                type_name: "Repeater<TItem>".to_string(),
                type_parameters: vec![],
                properties: vec![],
            },
            tag_name: "Repeater".to_string(),
            type_name: "Repeater<TItem>".to_string(),
            attributes: vec![],
            child_contents: vec![],
            captures: vec![],
            type_arguments: vec![],
            span: Span::new(0, 0),
            diagnostics: vec![],
            type_inference: None,
        }
    }

    #[test]
    fn test_slots_follow_fixed_order_and_defaults() {
        let mut node = usage();
        node.attributes.push(AttributeUse {
            name: "Items".to_string(),
            type_name: Some("IEnumerable<TItem>".to_string()),
            bound_property: Some("Items".to_string()),
            value: AttributeValue::Expression("intList".to_string()),
            span: Span::new(0, 0),
        });
        node.captures.push(CaptureUse {
            is_component_capture: false,
            type_name: None,
            span: Span::new(0, 0),
        });

        let slots = collect_parameter_slots(&mut node);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name.as_deref(), Some("Items"));
        assert_eq!(slots[0].call, BuilderCall::AddAttribute);
        assert_eq!(slots[1].name, None);
        assert_eq!(slots[1].type_name, "Quill.Rendering.ElementRef");
        assert_eq!(slots[1].call, BuilderCall::AddElementReferenceCapture);
    }

    #[test]
    fn test_code_block_attribute_is_rejected_and_skipped() {
        let mut node = usage();
        node.attributes.push(AttributeUse {
            name: "OnClick".to_string(),
            type_name: Some("Action".to_string()),
            bound_property: None,
            value: AttributeValue::CodeBlock("{ DoThing(); }".to_string()),
            span: Span::new(3, 17),
        });

        let slots = collect_parameter_slots(&mut node);
        assert!(slots.is_empty());
        assert_eq!(node.diagnostics.len(), 1);
        assert_eq!(
            node.diagnostics[0].kind,
            DiagnosticKind::CodeBlockInAttributeValue
        );
        assert!(node.diagnostics[0]
            .message()
            .contains("{ DoThing(); }"));
    }

    #[test]
    fn test_write_method_shape() {
        let method = TypeInferenceMethodNode {
            method_name: "CreateRepeater_0".to_string(),
            full_type_name: "__Quill.TypeInference".to_string(),
            type_parameters: vec!["TItem".to_string()],
            component_type_name: "Repeater<TItem>".to_string(),
            slots: vec![
                ParameterSlot {
                    name: Some("Items".to_string()),
                    type_name: "System.Collections.Generic.IEnumerable<TItem>".to_string(),
                    call: BuilderCall::AddAttribute,
                },
                ParameterSlot {
                    name: None,
                    type_name: "Repeater<TItem>".to_string(),
                    call: BuilderCall::AddComponentReferenceCapture,
                },
            ],
        };

        let mut writer = CodeWriter::new();
        write_type_inference_method(&mut writer, &method);
        let output = writer.into_output();

        assert!(output.contains(
            "public static void CreateRepeater_0<TItem>(\
             global::Quill.Rendering.RenderTreeBuilder builder, int seq, \
             int __seq0, global::System.Collections.Generic.IEnumerable<TItem> __arg0, \
             int __seq1, global::Repeater<TItem> __arg1)"
        ));
        assert!(output.contains("builder.OpenComponent<global::Repeater<TItem>>(seq);"));
        assert!(output.contains("builder.AddAttribute(__seq0, \"Items\", __arg0);"));
        assert!(output.contains("builder.AddComponentReferenceCapture(__seq1, __arg1);"));
        assert!(output.contains("builder.CloseComponent();"));
    }

    #[test]
    fn test_bare_type_parameter_slot_is_not_qualified() {
        let method = TypeInferenceMethodNode {
            method_name: "CreateCell_0".to_string(),
            full_type_name: "__Quill.TypeInference".to_string(),
            type_parameters: vec!["TValue".to_string()],
            component_type_name: "Cell<TValue>".to_string(),
            slots: vec![ParameterSlot {
                name: Some("Value".to_string()),
                type_name: "TValue".to_string(),
                call: BuilderCall::AddAttribute,
            }],
        };

        let mut writer = CodeWriter::new();
        write_type_inference_method(&mut writer, &method);
        let output = writer.into_output();

        assert!(output.contains("int __seq0, TValue __arg0)"));
        assert!(!output.contains("global::TValue"));
    }

    #[test]
    fn test_container_wraps_methods() {
        let container = InferenceContainer {
            namespace: "__Quill.MyApp.Pages".to_string(),
            class_name: "TypeInference".to_string(),
            methods: vec![TypeInferenceMethodNode {
                method_name: "CreateRepeater_0".to_string(),
                full_type_name: "__Quill.MyApp.Pages.TypeInference".to_string(),
                type_parameters: vec!["TItem".to_string()],
                component_type_name: "Repeater<TItem>".to_string(),
                slots: vec![],
            }],
        };

        let mut writer = CodeWriter::new();
        write_inference_container(&mut writer, &container);
        let output = writer.into_output();

        assert!(output.starts_with("namespace __Quill.MyApp.Pages\n{\n"));
        assert!(output.contains("internal static class TypeInference"));
        assert!(output.contains("CreateRepeater_0<TItem>"));
        assert!(output.ends_with("}\n"));
    }
}
