//! Visitor pattern for traversing the intermediate tree

use crate::ast::{ChildContentUse, ComponentNode, Document, Node};

/// Mutable visitor over the document tree
///
/// Default implementations walk the entire tree in document order. Override
/// specific visit_* methods to act on nodes; call the matching walk_* to
/// continue into children.
pub trait VisitorMut: Sized {
    fn visit_document_mut(&mut self, document: &mut Document) {
        walk_document_mut(self, document);
    }

    fn visit_node_mut(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_component_mut(&mut self, component: &mut ComponentNode) {
        walk_component_mut(self, component);
    }

    fn visit_child_content_mut(&mut self, child_content: &mut ChildContentUse) {
        walk_child_content_mut(self, child_content);
    }
}

pub fn walk_document_mut<V: VisitorMut>(visitor: &mut V, document: &mut Document) {
    for child in &mut document.children {
        visitor.visit_node_mut(child);
    }
}

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut Node) {
    match node {
        Node::Element { children, .. } => {
            for child in children {
                visitor.visit_node_mut(child);
            }
        }
        Node::Component(component) => visitor.visit_component_mut(component),
        Node::Text(_) => {}
    }
}

pub fn walk_component_mut<V: VisitorMut>(visitor: &mut V, component: &mut ComponentNode) {
    for child_content in &mut component.child_contents {
        visitor.visit_child_content_mut(child_content);
    }
}

pub fn walk_child_content_mut<V: VisitorMut>(
    visitor: &mut V,
    child_content: &mut ChildContentUse,
) {
    for child in &mut child_content.children {
        visitor.visit_node_mut(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    struct TagCollector {
        tags: Vec<String>,
    }

    impl VisitorMut for TagCollector {
        fn visit_component_mut(&mut self, component: &mut ComponentNode) {
            self.tags.push(component.tag_name.clone());
            walk_component_mut(self, component);
        }
    }

    fn usage(tag: &str, child_contents: Vec<ChildContentUse>) -> ComponentNode {
        ComponentNode {
            declaration: ComponentDeclaration {
                tag_name: tag.to_string(),
                type_name: tag.to_string(),
                type_parameters: vec![],
                properties: vec![],
            },
            tag_name: tag.to_string(),
            type_name: tag.to_string(),
            attributes: vec![],
            child_contents,
            captures: vec![],
            type_arguments: vec![],
            span: Span::new(0, 0),
            diagnostics: vec![],
            type_inference: None,
        }
    }

    #[test]
    fn test_walk_reaches_nested_usages_in_document_order() {
        let inner = usage("Inner", vec![]);
        let outer = usage(
            "Outer",
            vec![ChildContentUse {
                name: "ChildContent".to_string(),
                type_name: None,
                bound_property: None,
                children: vec![Node::Component(inner)],
                span: Span::new(0, 0),
            }],
        );

        let mut document = Document {
            path: "test.quill".to_string(),
            namespace: String::new(),
            children: vec![
                Node::Element {
                    tag: "div".to_string(),
                    children: vec![Node::Component(outer)],
                    span: Span::new(0, 0),
                },
                Node::Component(usage("Sibling", vec![])),
            ],
            inference_container: None,
        };

        let mut collector = TagCollector { tags: vec![] };
        collector.visit_document_mut(&mut document);

        assert_eq!(collector.tags, vec!["Outer", "Inner", "Sibling"]);
    }
}
