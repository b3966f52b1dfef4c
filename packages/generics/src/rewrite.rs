//! Type-name rewriting
//!
//! Substitutes resolved type parameters inside literal type text: the
//! component type name of a usage and the declared types copied onto its
//! attributes and child content. Identifiers matching no parameter are left
//! unchanged; substitution recurses through generic argument lists.

use crate::api;
use crate::bindings::BindingTable;
use crate::error::{PassError, PassResult};
use quill_ir::ast::ComponentNode;
use quill_typename::{parse_type_name, TypeExpr, TypeNameResult};
use std::collections::HashMap;

fn substitution_map(bindings: &BindingTable) -> HashMap<String, TypeExpr> {
    bindings
        .substitutions()
        .into_iter()
        .map(|(name, expr)| {
            let expr =
                expr.unwrap_or_else(|| TypeExpr::Identifier(api::FALLBACK_TYPE.to_string()));
            (name, expr)
        })
        .collect()
}

/// Rewrite one literal type name against a binding table. Pending parameters
/// become the fallback type; covered ones stay bare.
pub fn rewrite_type_name(type_name: &str, bindings: &BindingTable) -> TypeNameResult<String> {
    let parsed = parse_type_name(type_name)?;
    Ok(parsed.substitute(&substitution_map(bindings)).to_string())
}

/// Rewrite every type name on a usage that can reference a type parameter:
/// the component type name, plus each attribute/child-content type whose
/// bound property is generic-typed.
pub fn rewrite_usage(node: &mut ComponentNode, bindings: &BindingTable) -> PassResult<()> {
    let rewritten = rewrite_type_name(&node.type_name, bindings).map_err(|source| {
        PassError::InvalidTypeName {
            component: node.tag_name.clone(),
            type_name: node.type_name.clone(),
            source,
        }
    })?;
    node.type_name = rewritten;

    let declaration = &node.declaration;
    let tag_name = &node.tag_name;

    for attribute in &mut node.attributes {
        let generic_typed = attribute
            .bound_property
            .as_deref()
            .and_then(|name| declaration.property(name))
            .map(|property| property.is_generic_typed)
            .unwrap_or(false);
        if !generic_typed {
            continue;
        }
        if let Some(type_name) = &attribute.type_name {
            let rewritten = rewrite_type_name(type_name, bindings).map_err(|source| {
                PassError::InvalidTypeName {
                    component: tag_name.clone(),
                    type_name: type_name.clone(),
                    source,
                }
            })?;
            attribute.type_name = Some(rewritten);
        }
    }

    for child_content in &mut node.child_contents {
        let generic_typed = child_content
            .bound_property
            .as_deref()
            .and_then(|name| declaration.property(name))
            .map(|property| property.is_generic_typed)
            .unwrap_or(false);
        if !generic_typed {
            continue;
        }
        if let Some(type_name) = &child_content.type_name {
            let rewritten = rewrite_type_name(type_name, bindings).map_err(|source| {
                PassError::InvalidTypeName {
                    component: tag_name.clone(),
                    type_name: type_name.clone(),
                    source,
                }
            })?;
            child_content.type_name = Some(rewritten);
        }
    }

    Ok(())
}

/// Prefix a type name with the root qualifier unless it is a bare reference
/// to one of the method's own type parameters or the fallback keyword alias,
/// which resolves the same from any scope. Inner generic arguments are not
/// re-qualified; upstream always supplies full type names.
pub fn qualify_type_name(type_name: &str, type_parameters: &[String]) -> String {
    if type_name == api::FALLBACK_TYPE
        || type_parameters.iter().any(|parameter| parameter == type_name)
    {
        type_name.to_string()
    } else {
        format!("{}{}", api::GLOBAL_PREFIX, type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_ir::ast::{ComponentDeclaration, TypeParameter};

    fn table(parameters: &[&str]) -> BindingTable {
        BindingTable::for_component(&ComponentDeclaration {
            tag_name: "Grid".to_string(),
            type_name: "Grid".to_string(),
            type_parameters: parameters
                .iter()
                .map(|name| TypeParameter {
                    name: (*name).to_string(),
                })
                .collect(),
            properties: vec![],
        })
    }

    #[test]
    fn test_explicit_substitution_through_nested_arguments() {
        let mut bindings = table(&["TItem"]);
        bindings
            .set_explicit(
                "TItem",
                Some(parse_type_name("System.Int32").unwrap()),
                "System.Int32".to_string(),
            )
            .unwrap();

        let rewritten =
            rewrite_type_name("Dictionary<string, List<TItem>>", &bindings).unwrap();
        assert_eq!(rewritten, "Dictionary<string, List<System.Int32>>");
        assert!(!rewritten.contains("TItem"));
    }

    #[test]
    fn test_pending_parameters_become_fallback() {
        let bindings = table(&["TValue"]);
        let rewritten = rewrite_type_name("Grid<TValue>", &bindings).unwrap();
        assert_eq!(rewritten, "Grid<object>");
    }

    #[test]
    fn test_covered_parameters_stay_bare() {
        let mut bindings = table(&["TItem"]);
        bindings.cover("TItem");

        let rewritten = rewrite_type_name("Grid<TItem>", &bindings).unwrap();
        assert_eq!(rewritten, "Grid<TItem>");
    }

    #[test]
    fn test_rewrite_without_matches_is_textually_stable() {
        let bindings = table(&[]);
        let rewritten =
            rewrite_type_name("System.Collections.Generic.List<string>", &bindings).unwrap();
        assert_eq!(rewritten, "System.Collections.Generic.List<string>");
    }

    #[test]
    fn test_qualify_skips_bare_type_parameters() {
        let parameters = vec!["TItem".to_string()];
        assert_eq!(qualify_type_name("TItem", &parameters), "TItem");
        assert_eq!(
            qualify_type_name("System.String", &parameters),
            "global::System.String"
        );
        // A generic instantiation over a parameter is not a bare reference
        assert_eq!(
            qualify_type_name("List<TItem>", &parameters),
            "global::List<TItem>"
        );
        // The fallback keyword alias never needs qualification
        assert_eq!(qualify_type_name("object", &parameters), "object");
    }
}
