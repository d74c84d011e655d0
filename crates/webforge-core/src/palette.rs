//! The component palette offered to the editor UI.

use crate::types::NodeType;
use convert_case::{Case, Casing};

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub node_type: NodeType,
    pub label: String,
}

impl NodeType {
    /// Human label shown in the palette.
    pub fn label(&self) -> String {
        self.as_str().to_case(Case::Title)
    }
}

/// All creatable component types, in display order.
pub fn palette() -> Vec<PaletteEntry> {
    NodeType::ALL
        .into_iter()
        .map(|node_type| PaletteEntry {
            node_type,
            label: node_type.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_and_labels() {
        let entries = palette();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].label, "Heading");
        assert_eq!(entries[2].node_type, NodeType::Image);
        assert_eq!(entries[7].label, "Grid");
    }
}
