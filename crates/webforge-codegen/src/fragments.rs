//! Per-type markup for exported source.
//!
//! Only headings, paragraphs and buttons are exported. Every other type,
//! including the ones the preview can render, exports as an empty fragment.

use crate::markup::{Element, Markup};
use webforge_core::{ComponentNode, NodeKind};

pub const HEADING_CLASS: &str = "text-2xl font-bold mb-4";
pub const PARAGRAPH_CLASS: &str = "mb-4";
pub const BUTTON_CLASS: &str = "px-4 py-2 bg-blue-500 text-white rounded";

pub const HEADING_TEXT: &str = "Heading";
pub const PARAGRAPH_TEXT: &str = "Paragraph text";
pub const BUTTON_TEXT: &str = "Button";

/// Class list of the generated root wrapper.
pub const ROOT_CLASS: &str = "min-h-screen bg-gray-50 p-8";

/// Markup for one node in exported source.
pub fn export_fragment(node: &ComponentNode) -> Markup {
    let class = node.common.class_name.as_deref();
    match &node.kind {
        NodeKind::Heading { text } => {
            text_element("h1", class, HEADING_CLASS, text.as_deref(), HEADING_TEXT)
        }
        NodeKind::Paragraph { text } => {
            text_element("p", class, PARAGRAPH_CLASS, text.as_deref(), PARAGRAPH_TEXT)
        }
        NodeKind::Button { text } => {
            text_element("button", class, BUTTON_CLASS, text.as_deref(), BUTTON_TEXT)
        }
        _ => {
            tracing::debug!(id = %node.id, kind = node.tag(), "type has no export mapping");
            Markup::Empty
        }
    }
}

/// Root wrapper holding every top-level fragment in order.
pub fn export_root(nodes: &[ComponentNode]) -> Element {
    Element::new("div")
        .class(ROOT_CLASS)
        .children(nodes.iter().map(export_fragment))
}

fn text_element(
    tag: &str,
    class: Option<&str>,
    default_class: &str,
    text: Option<&str>,
    default_text: &str,
) -> Markup {
    Element::new(tag)
        .class(non_empty_or(class, default_class))
        .text(non_empty_or(text, default_text))
        .into()
}

/// An absent or empty value falls back to the default.
pub(crate) fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Dialect, Printer};
    use webforge_core::NodeType;

    fn jsx(node: &ComponentNode) -> String {
        Printer::new(Dialect::Jsx).print(&export_fragment(node))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            jsx(&ComponentNode::new("h", NodeType::Heading)),
            r#"<h1 className="text-2xl font-bold mb-4">Heading</h1>"#
        );
        assert_eq!(
            jsx(&ComponentNode::new("p", NodeType::Paragraph)),
            r#"<p className="mb-4">Paragraph text</p>"#
        );
        assert_eq!(
            jsx(&ComponentNode::new("b", NodeType::Button)),
            r#"<button className="px-4 py-2 bg-blue-500 text-white rounded">Button</button>"#
        );
    }

    #[test]
    fn test_custom_props() {
        let node = ComponentNode::new("h", NodeType::Heading)
            .with_text("Welcome")
            .with_class("text-5xl");
        assert_eq!(
            Printer::new(Dialect::Html).print(&export_fragment(&node)),
            r#"<h1 class="text-5xl">Welcome</h1>"#
        );
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let node = ComponentNode::new("b", NodeType::Button).with_text("").with_class("");
        assert_eq!(
            jsx(&node),
            r#"<button className="px-4 py-2 bg-blue-500 text-white rounded">Button</button>"#
        );
    }

    #[test]
    fn test_unexported_types_are_empty() {
        for t in [
            NodeType::Image,
            NodeType::List,
            NodeType::Input,
            NodeType::Container,
            NodeType::Grid,
        ] {
            assert!(export_fragment(&ComponentNode::new("x", t)).is_empty());
        }
    }
}
