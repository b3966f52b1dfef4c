//! Generic component resolution pass
//!
//! Visits every component usage in document order. For generic components it
//! resolves the type-parameter bindings — from explicit type arguments when
//! the author supplied them, otherwise by checking that the supplied values
//! cover every parameter — rewrites type names in place, and synthesizes one
//! inference method per call site left to the host compiler's inference.

use crate::api;
use crate::bindings::BindingTable;
use crate::error::{PassError, PassResult};
use crate::rewrite;
use crate::synthesize;
use quill_ir::ast::{
    ComponentNode, Document, InferenceContainer, TypeInferenceMethodNode, TypeInferenceRef,
};
use quill_ir::diagnostics;
use quill_ir::visitor::{walk_component_mut, VisitorMut};
use quill_typename::parse_type_name;
use tracing::debug;

/// The pass. Holds no state of its own; per-document state lives in the
/// walker and dies with it, so method-name counters reset for each document.
pub struct GenericComponentPass;

impl GenericComponentPass {
    pub fn new() -> Self {
        Self
    }

    /// Run the pass over one document, mutating it in place. Diagnostics
    /// land on the offending usage nodes; an `Err` means an upstream pass
    /// broke its contract and the document should be abandoned.
    pub fn execute(&self, document: &mut Document) -> PassResult<()> {
        let mut walker = Walker {
            namespace: container_namespace(&document.namespace),
            next_id: 0,
            container: None,
            error: None,
        };
        walker.visit_document_mut(document);

        if let Some(error) = walker.error {
            return Err(error);
        }
        if walker.container.is_some() {
            document.inference_container = walker.container;
        }
        Ok(())
    }
}

impl Default for GenericComponentPass {
    fn default() -> Self {
        Self::new()
    }
}

fn container_namespace(document_namespace: &str) -> String {
    if document_namespace.is_empty() {
        api::SYNTHETIC_NAMESPACE_ROOT.to_string()
    } else {
        format!(
            "{}.{}",
            api::SYNTHETIC_NAMESPACE_ROOT,
            document_namespace
        )
    }
}

struct Walker {
    namespace: String,
    /// Per-document counter for generated method names
    next_id: usize,
    container: Option<InferenceContainer>,
    error: Option<PassError>,
}

impl VisitorMut for Walker {
    fn visit_component_mut(&mut self, component: &mut ComponentNode) {
        if self.error.is_some() {
            return;
        }
        if component.declaration.is_generic() {
            if let Err(error) = self.process(component) {
                self.error = Some(error);
                return;
            }
        }
        walk_component_mut(self, component);
    }
}

impl Walker {
    fn container_mut(&mut self) -> &mut InferenceContainer {
        let namespace = self.namespace.clone();
        self.container.get_or_insert_with(|| InferenceContainer {
            namespace,
            class_name: api::TYPE_INFERENCE_CLASS.to_string(),
            methods: Vec::new(),
        })
    }

    fn process(&mut self, node: &mut ComponentNode) -> PassResult<()> {
        debug!(component = %node.tag_name, "resolving generic component usage");

        let mut bindings = BindingTable::for_component(&node.declaration);

        for argument in &node.type_arguments {
            let expr = if argument.text.trim().is_empty() {
                None
            } else {
                Some(parse_type_name(&argument.text).map_err(|source| {
                    PassError::InvalidTypeName {
                        component: node.tag_name.clone(),
                        type_name: argument.text.clone(),
                        source,
                    }
                })?)
            };
            bindings.set_explicit(&argument.parameter_name, expr, argument.text.clone())?;
        }

        if bindings.has_explicit() {
            // The author specified at least one type argument: either the
            // list is complete and we rewrite, or it is an error.
            let missing = bindings.missing_explicit();
            if !missing.is_empty() {
                node.diagnostics.push(diagnostics::missing_type_argument(
                    Some(node.span),
                    &node.tag_name,
                    &missing,
                ));
                return Ok(());
            }
            rewrite::rewrite_usage(node, &bindings)?;
            return Ok(());
        }

        // No type arguments: the host compiler infers them at the call site
        // of the synthesized method. Verify that the supplied values cover
        // every parameter; a repeater whose item type never appears in a set
        // property can never be inferred.
        cover_from_properties(node, &mut bindings)?;

        let pending = bindings.pending();
        if !pending.is_empty() {
            // Still generate the inference method so follow-on errors stay
            // readable: substitute the fallback type and tell the user.
            rewrite::rewrite_usage(node, &bindings)?;
            node.diagnostics.push(diagnostics::inference_underspecified(
                Some(node.span),
                &node.tag_name,
                &pending,
            ));
        }

        let slots = synthesize::collect_parameter_slots(node);
        let method_name = format!("Create{}_{}", node.tag_name, self.next_id);
        self.next_id += 1;

        let container = self.container_mut();
        let full_type_name = format!("{}.{}", container.namespace, container.class_name);
        container.methods.push(TypeInferenceMethodNode {
            method_name: method_name.clone(),
            full_type_name: full_type_name.clone(),
            type_parameters: node
                .declaration
                .type_parameters
                .iter()
                .map(|parameter| parameter.name.clone())
                .collect(),
            component_type_name: node.type_name.clone(),
            slots,
        });

        node.type_inference = Some(TypeInferenceRef {
            method_name,
            full_type_name,
        });
        Ok(())
    }
}

/// Scan the declared types of every generic-typed property the usage
/// supplies a value for, covering each parameter they name. Uses that match
/// no declared property are skipped; a dangling bound-property link is an
/// upstream invariant violation.
fn cover_from_properties(node: &ComponentNode, bindings: &mut BindingTable) -> PassResult<()> {
    let uses = node
        .attributes
        .iter()
        .map(|attribute| (attribute.name.as_str(), attribute.bound_property.as_deref()))
        .chain(
            node.child_contents
                .iter()
                .map(|content| (content.name.as_str(), content.bound_property.as_deref())),
        );

    for (use_name, bound_property) in uses {
        let Some(property_name) = bound_property else {
            continue;
        };
        let property = node.declaration.property(property_name).ok_or_else(|| {
            PassError::UnknownBoundProperty {
                component: node.tag_name.clone(),
                attribute: use_name.to_string(),
                property: property_name.to_string(),
            }
        })?;
        if !property.is_generic_typed {
            continue;
        }

        let parsed = parse_type_name(&property.type_name).map_err(|source| {
            PassError::InvalidTypeName {
                component: node.tag_name.clone(),
                type_name: property.type_name.clone(),
                source,
            }
        })?;
        for candidate in parsed.generic_argument_candidates() {
            bindings.cover(&candidate);
        }
    }

    Ok(())
}
