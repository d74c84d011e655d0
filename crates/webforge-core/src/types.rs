//! Identifier and tag types shared across the builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a component node, unique within a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The known component type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Heading,
    Paragraph,
    Image,
    Button,
    List,
    Input,
    Container,
    Grid,
}

impl NodeType {
    /// All known tags, in palette order.
    pub const ALL: [NodeType; 8] = [
        NodeType::Heading,
        NodeType::Paragraph,
        NodeType::Image,
        NodeType::Button,
        NodeType::List,
        NodeType::Input,
        NodeType::Container,
        NodeType::Grid,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Heading => "heading",
            NodeType::Paragraph => "paragraph",
            NodeType::Image => "image",
            NodeType::Button => "button",
            NodeType::List => "list",
            NodeType::Input => "input",
            NodeType::Container => "container",
            NodeType::Grid => "grid",
        }
    }

    /// Whether nodes of this type carry children.
    pub const fn is_container(&self) -> bool {
        matches!(self, NodeType::Container | NodeType::Grid)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// A tag that names no known node type or framework.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);

/// Output frameworks supported by the code generator and packager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framework {
    #[default]
    React,
    Vue,
    Svelte,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Svelte];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }

    /// Parse a stored framework tag; `None` for anything unrecognized.
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_round_trip() {
        for t in NodeType::ALL {
            assert_eq!(t.as_str().parse::<NodeType>().unwrap(), t);
        }
        assert!("carousel".parse::<NodeType>().is_err());
    }

    #[test]
    fn test_framework_parse() {
        assert_eq!(Framework::parse("vue"), Some(Framework::Vue));
        assert_eq!(Framework::parse("React"), None);
        assert_eq!(Framework::default(), Framework::React);
    }

    #[test]
    fn test_containers() {
        assert!(NodeType::Grid.is_container());
        assert!(!NodeType::List.is_container());
    }
}
