//! Component tree nodes.
//!
//! A node travels in two shapes. The wire form ([`RawNode`]) is the open
//! `{id, type, props, children}` JSON object that the code editor shows and the
//! storage record holds. The typed form ([`ComponentNode`]) carries one
//! [`NodeKind`] variant per known type with only the fields that type uses.
//! Tags outside the known set become [`NodeKind::Unknown`] and keep their
//! props verbatim, so nothing a user typed into the editor is lost for them.

use crate::types::{NodeId, NodeType};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The JSON wire form of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Properties every known node type accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonProps {
    /// Styling class list (`props.className`).
    pub class_name: Option<String>,
    /// Inline style object, passed through to the preview untouched.
    pub style: Option<Map<String, Value>>,
}

/// Per-type payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Heading { text: Option<String> },
    Paragraph { text: Option<String> },
    Button { text: Option<String> },
    Image { src: Option<String>, alt: Option<String> },
    List { items: Option<Vec<String>> },
    Input { input_type: Option<String>, placeholder: Option<String> },
    Container { children: Vec<ComponentNode> },
    Grid { children: Vec<ComponentNode> },
    /// A tag outside the known set. Renders and generates nothing.
    Unknown {
        tag: String,
        props: Map<String, Value>,
        children: Option<Vec<ComponentNode>>,
    },
}

impl NodeKind {
    /// Empty payload for a freshly created node.
    pub fn empty(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Heading => NodeKind::Heading { text: None },
            NodeType::Paragraph => NodeKind::Paragraph { text: None },
            NodeType::Button => NodeKind::Button { text: None },
            NodeType::Image => NodeKind::Image { src: None, alt: None },
            NodeType::List => NodeKind::List { items: None },
            NodeType::Input => NodeKind::Input {
                input_type: None,
                placeholder: None,
            },
            NodeType::Container => NodeKind::Container { children: Vec::new() },
            NodeType::Grid => NodeKind::Grid { children: Vec::new() },
        }
    }

    /// The known type, or `None` for [`NodeKind::Unknown`].
    pub fn node_type(&self) -> Option<NodeType> {
        Some(match self {
            NodeKind::Heading { .. } => NodeType::Heading,
            NodeKind::Paragraph { .. } => NodeType::Paragraph,
            NodeKind::Button { .. } => NodeType::Button,
            NodeKind::Image { .. } => NodeType::Image,
            NodeKind::List { .. } => NodeType::List,
            NodeKind::Input { .. } => NodeType::Input,
            NodeKind::Container { .. } => NodeType::Container,
            NodeKind::Grid { .. } => NodeType::Grid,
            NodeKind::Unknown { .. } => return None,
        })
    }

    /// The type tag as it appears on the wire.
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Unknown { tag, .. } => tag,
            other => other.node_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }
}

/// A single element of the page tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct ComponentNode {
    pub id: NodeId,
    pub common: CommonProps,
    pub kind: NodeKind,
}

impl ComponentNode {
    /// Create an empty node of the given type.
    pub fn new(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            common: CommonProps::default(),
            kind: NodeKind::empty(node_type),
        }
    }

    /// Create a node the way the palette does: id is `<type>-<stamp>`.
    pub fn from_palette(node_type: NodeType, stamp: u64) -> Self {
        Self::new(format!("{}-{}", node_type.as_str(), stamp), node_type)
    }

    /// Set the styling class.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.common.class_name = Some(class_name.into());
        self
    }

    /// Set the text content. No effect on types without text.
    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            NodeKind::Heading { text }
            | NodeKind::Paragraph { text }
            | NodeKind::Button { text } => *text = Some(value.into()),
            _ => {}
        }
        self
    }

    /// Append a child. No effect on types without children.
    pub fn with_child(mut self, child: ComponentNode) -> Self {
        match &mut self.kind {
            NodeKind::Container { children } | NodeKind::Grid { children } => children.push(child),
            NodeKind::Unknown { children, .. } => children.get_or_insert_with(Vec::new).push(child),
            _ => {}
        }
        self
    }

    pub fn node_type(&self) -> Option<NodeType> {
        self.kind.node_type()
    }

    pub fn tag(&self) -> &str {
        self.kind.tag()
    }

    /// Child nodes, if this node carries any.
    pub fn children(&self) -> &[ComponentNode] {
        match &self.kind {
            NodeKind::Container { children } | NodeKind::Grid { children } => children.as_slice(),
            NodeKind::Unknown {
                children: Some(children),
                ..
            } => children.as_slice(),
            _ => &[],
        }
    }
}

impl From<RawNode> for ComponentNode {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            id,
            node_type,
            mut props,
            children,
        } = raw;

        let Ok(known) = node_type.parse::<NodeType>() else {
            return Self {
                id,
                common: CommonProps::default(),
                kind: NodeKind::Unknown {
                    tag: node_type,
                    props,
                    children: children.map(convert_children),
                },
            };
        };

        let common = CommonProps {
            class_name: take_text(&mut props, "className"),
            style: match props.remove("style") {
                Some(Value::Object(style)) => Some(style),
                _ => None,
            },
        };

        let kind = match known {
            NodeType::Heading => NodeKind::Heading {
                text: take_text(&mut props, "text"),
            },
            NodeType::Paragraph => NodeKind::Paragraph {
                text: take_text(&mut props, "text"),
            },
            NodeType::Button => NodeKind::Button {
                text: take_text(&mut props, "text"),
            },
            NodeType::Image => NodeKind::Image {
                src: take_text(&mut props, "src"),
                alt: take_text(&mut props, "alt"),
            },
            NodeType::List => NodeKind::List {
                items: take_items(&mut props),
            },
            NodeType::Input => NodeKind::Input {
                input_type: take_text(&mut props, "type"),
                placeholder: take_text(&mut props, "placeholder"),
            },
            NodeType::Container | NodeType::Grid => {
                // Node-level children win; older records kept them in props.
                let children = children
                    .or_else(|| {
                        props
                            .remove("children")
                            .and_then(|v| serde_json::from_value::<Vec<RawNode>>(v).ok())
                    })
                    .map(convert_children)
                    .unwrap_or_default();
                if known == NodeType::Container {
                    NodeKind::Container { children }
                } else {
                    NodeKind::Grid { children }
                }
            }
        };

        Self { id, common, kind }
    }
}

impl From<ComponentNode> for RawNode {
    fn from(node: ComponentNode) -> Self {
        let ComponentNode { id, common, kind } = node;
        let mut props = Map::new();
        let mut children = None;

        if let Some(class_name) = common.class_name {
            props.insert("className".into(), Value::String(class_name));
        }
        if let Some(style) = common.style {
            props.insert("style".into(), Value::Object(style));
        }

        let node_type = match kind {
            NodeKind::Heading { text } => {
                put_text(&mut props, "text", text);
                NodeType::Heading.as_str().to_string()
            }
            NodeKind::Paragraph { text } => {
                put_text(&mut props, "text", text);
                NodeType::Paragraph.as_str().to_string()
            }
            NodeKind::Button { text } => {
                put_text(&mut props, "text", text);
                NodeType::Button.as_str().to_string()
            }
            NodeKind::Image { src, alt } => {
                put_text(&mut props, "src", src);
                put_text(&mut props, "alt", alt);
                NodeType::Image.as_str().to_string()
            }
            NodeKind::List { items } => {
                if let Some(items) = items {
                    props.insert(
                        "items".into(),
                        Value::Array(items.into_iter().map(Value::String).collect()),
                    );
                }
                NodeType::List.as_str().to_string()
            }
            NodeKind::Input {
                input_type,
                placeholder,
            } => {
                put_text(&mut props, "type", input_type);
                put_text(&mut props, "placeholder", placeholder);
                NodeType::Input.as_str().to_string()
            }
            NodeKind::Container { children: kids } => {
                children = raw_children(kids);
                NodeType::Container.as_str().to_string()
            }
            NodeKind::Grid { children: kids } => {
                children = raw_children(kids);
                NodeType::Grid.as_str().to_string()
            }
            NodeKind::Unknown {
                tag,
                props: unknown_props,
                children: kids,
            } => {
                props.extend(unknown_props);
                children = kids.map(|k| k.into_iter().map(RawNode::from).collect());
                tag
            }
        };

        RawNode {
            id,
            node_type,
            props,
            children,
        }
    }
}

/// A partial update to a node, shallow-merged over its wire form.
///
/// A supplied `props` object replaces the node's whole props object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeUpdate {
    pub id: Option<NodeId>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub props: Option<Map<String, Value>>,
    pub children: Option<Vec<ComponentNode>>,
}

impl NodeUpdate {
    /// An update that replaces only the props object.
    pub fn props(props: Map<String, Value>) -> Self {
        Self {
            props: Some(props),
            ..Default::default()
        }
    }

    /// Merge this update into `node`, re-typing the result.
    pub fn apply_to(self, node: ComponentNode) -> ComponentNode {
        let mut raw = RawNode::from(node);
        if let Some(id) = self.id {
            raw.id = id;
        }
        if let Some(node_type) = self.node_type {
            raw.node_type = node_type;
        }
        if let Some(props) = self.props {
            raw.props = props;
        }
        if let Some(children) = self.children {
            raw.children = Some(children.into_iter().map(RawNode::from).collect());
        }
        ComponentNode::from(raw)
    }
}

fn convert_children(children: Vec<RawNode>) -> Vec<ComponentNode> {
    children.into_iter().map(ComponentNode::from).collect()
}

fn raw_children(children: Vec<ComponentNode>) -> Option<Vec<RawNode>> {
    if children.is_empty() {
        None
    } else {
        Some(children.into_iter().map(RawNode::from).collect())
    }
}

/// Read a prop as text. Scalars print the way a template string would.
fn take_text(props: &mut Map<String, Value>, key: &str) -> Option<String> {
    match props.remove(key)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn take_items(props: &mut Map<String, Value>) -> Option<Vec<String>> {
    match props.remove("items")? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}

fn put_text(props: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        props.insert(key.into(), Value::String(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ComponentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_heading_from_wire() {
        let node = parse(json!({
            "id": "heading-1",
            "type": "heading",
            "props": { "text": "Hello", "className": "text-4xl" }
        }));
        assert_eq!(node.id.as_str(), "heading-1");
        assert_eq!(node.common.class_name.as_deref(), Some("text-4xl"));
        assert_eq!(
            node.kind,
            NodeKind::Heading {
                text: Some("Hello".into())
            }
        );
    }

    #[test]
    fn test_missing_and_null_props() {
        let node = parse(json!({ "id": "p", "type": "paragraph" }));
        assert_eq!(node.kind, NodeKind::Paragraph { text: None });

        let node = parse(json!({ "id": "p", "type": "paragraph", "props": null }));
        assert_eq!(node.kind, NodeKind::Paragraph { text: None });
    }

    #[test]
    fn test_scalar_text_is_coerced() {
        let node = parse(json!({ "id": "b", "type": "button", "props": { "text": 42 } }));
        assert_eq!(node.kind, NodeKind::Button { text: Some("42".into()) });
    }

    #[test]
    fn test_unknown_type_keeps_props() {
        let wire = json!({
            "id": "c-1",
            "type": "carousel",
            "props": { "slides": [1, 2, 3], "className": "w-full" }
        });
        let node = parse(wire.clone());
        assert_eq!(node.node_type(), None);
        assert_eq!(node.tag(), "carousel");
        assert_eq!(serde_json::to_value(&node).unwrap(), wire);
    }

    #[test]
    fn test_container_children() {
        let node = parse(json!({
            "id": "box",
            "type": "container",
            "props": {},
            "children": [{ "id": "h", "type": "heading", "props": {} }]
        }));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].node_type(), Some(NodeType::Heading));
    }

    #[test]
    fn test_legacy_props_children() {
        let node = parse(json!({
            "id": "g",
            "type": "grid",
            "props": { "children": [{ "id": "b", "type": "button", "props": {} }] }
        }));
        assert_eq!(node.children().len(), 1);

        let raw = RawNode::from(node);
        assert!(raw.props.get("children").is_none());
        assert_eq!(raw.children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_list_items() {
        let node = parse(json!({
            "id": "l",
            "type": "list",
            "props": { "items": ["a", 2, true] }
        }));
        assert_eq!(
            node.kind,
            NodeKind::List {
                items: Some(vec!["a".into(), "2".into(), "true".into()])
            }
        );
    }

    #[test]
    fn test_palette_id() {
        let node = ComponentNode::from_palette(NodeType::Image, 1700000000000);
        assert_eq!(node.id.as_str(), "image-1700000000000");
        let raw = RawNode::from(node);
        assert!(raw.props.is_empty());
        assert!(raw.children.is_none());
    }

    #[test]
    fn test_update_replaces_props() {
        let node = ComponentNode::new("h", NodeType::Heading)
            .with_text("Old")
            .with_class("a");
        let mut props = Map::new();
        props.insert("text".into(), json!("New"));

        let updated = NodeUpdate::props(props).apply_to(node);
        assert_eq!(updated.kind, NodeKind::Heading { text: Some("New".into()) });
        assert_eq!(updated.common.class_name, None);
    }

    #[test]
    fn test_update_changes_type() {
        let node = ComponentNode::new("x", NodeType::Heading).with_text("Title");
        let update = NodeUpdate {
            node_type: Some("button".into()),
            ..Default::default()
        };
        let updated = update.apply_to(node);
        assert_eq!(updated.kind, NodeKind::Button { text: Some("Title".into()) });
    }
}
