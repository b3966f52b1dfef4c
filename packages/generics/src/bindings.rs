//! Per-call-site binding table
//!
//! One table per component usage, built fresh from the declaration's type
//! parameters and never shared across usages. Each declared parameter has
//! exactly one entry, in declared order.

use crate::error::{PassError, PassResult};
use quill_ir::ast::{ComponentDeclaration, TypeParameter};
use quill_typename::TypeExpr;
use std::collections::HashMap;

/// Resolution state of one type parameter at one call site
#[derive(Debug, Clone, PartialEq)]
pub enum BindingState {
    /// No information yet
    Pending,
    /// Named by a supplied value's declared type; the concrete type will be
    /// deduced by the host compiler at the call site, not computed here
    Covered,
    /// Explicitly supplied by the author. `expr` is `None` when the supplied
    /// text was blank.
    Explicit {
        expr: Option<TypeExpr>,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub parameter: TypeParameter,
    pub state: BindingState,
}

/// Binding table for one component usage
#[derive(Debug, Clone)]
pub struct BindingTable {
    component: String,
    entries: Vec<Binding>,
}

impl BindingTable {
    pub fn for_component(declaration: &ComponentDeclaration) -> Self {
        Self {
            component: declaration.tag_name.clone(),
            entries: declaration
                .type_parameters
                .iter()
                .map(|parameter| Binding {
                    parameter: parameter.clone(),
                    state: BindingState::Pending,
                })
                .collect(),
        }
    }

    /// Record an explicit type argument. A name that matches no declared
    /// parameter is an upstream invariant violation.
    pub fn set_explicit(
        &mut self,
        name: &str,
        expr: Option<TypeExpr>,
        text: String,
    ) -> PassResult<()> {
        let binding = self
            .entries
            .iter_mut()
            .find(|binding| binding.parameter.name == name)
            .ok_or_else(|| PassError::UndeclaredTypeParameter {
                component: self.component.clone(),
                name: name.to_string(),
            })?;
        binding.state = BindingState::Explicit { expr, text };
        Ok(())
    }

    pub fn has_explicit(&self) -> bool {
        self.entries
            .iter()
            .any(|binding| matches!(binding.state, BindingState::Explicit { .. }))
    }

    /// Parameters without a usable explicit argument (unset or blank text),
    /// in declared order
    pub fn missing_explicit(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|binding| match &binding.state {
                BindingState::Explicit {
                    expr: Some(_),
                    text,
                } => text.trim().is_empty(),
                _ => true,
            })
            .map(|binding| binding.parameter.name.clone())
            .collect()
    }

    /// Mark a parameter as covered when `text` names a pending one. Repeated
    /// occurrences are covered on first sight; no conflict checking between
    /// occurrences.
    pub fn cover(&mut self, text: &str) {
        if let Some(binding) = self
            .entries
            .iter_mut()
            .find(|binding| binding.parameter.name == text)
        {
            if binding.state == BindingState::Pending {
                binding.state = BindingState::Covered;
            }
        }
    }

    /// Parameters still unresolved, in declared order
    pub fn pending(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|binding| binding.state == BindingState::Pending)
            .map(|binding| binding.parameter.name.clone())
            .collect()
    }

    /// Substitution map for the rewriter: explicit parameters map to their
    /// supplied expression, pending ones to `None` (fallback). Covered
    /// parameters are omitted so they stay bare for the host compiler to
    /// infer.
    pub fn substitutions(&self) -> HashMap<String, Option<TypeExpr>> {
        self.entries
            .iter()
            .filter_map(|binding| match &binding.state {
                BindingState::Pending => Some((binding.parameter.name.clone(), None)),
                BindingState::Covered => None,
                BindingState::Explicit { expr, .. } => {
                    Some((binding.parameter.name.clone(), expr.clone()))
                }
            })
            .collect()
    }
}
