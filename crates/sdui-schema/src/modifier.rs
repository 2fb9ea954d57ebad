//! Modifier nodes: server-described visual decorations.

use serde::{Deserialize, Serialize};

use crate::action::ClickAction;

/// One entry of a node's `modifier` list.
///
/// As with [`ViewNode`](crate::ViewNode), `kind` (wire name `type`)
/// discriminates and the remaining fields are an open optional set; which
/// ones a given kind requires is decided by the decoder in `sdui-core`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModifierNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ClickAction>,
}

impl ModifierNode {
    /// A modifier with only a kind, as servers send for PADDING.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_shadow_with_offsets() {
        let json = r#"{"type": "SHADOW", "color": "BLACK", "radius": 10, "x": 5, "y": 5}"#;
        let m: ModifierNode = serde_json::from_str(json).unwrap();
        assert_eq!(m.kind, "SHADOW");
        assert_eq!(m.radius, Some(10));
        assert_eq!(m.x, Some(5));
    }

    #[test]
    fn border_width_wire_name() {
        let m = ModifierNode {
            kind: "BORDER".into(),
            border_width: Some(2),
            ..ModifierNode::default()
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"borderWidth\":2"));
    }

    #[test]
    fn clickable_carries_an_action() {
        let json = r#"{"type": "CLICKABLE",
                       "action": {"type": "NAVIGATION", "destination": "details"}}"#;
        let m: ModifierNode = serde_json::from_str(json).unwrap();
        assert_eq!(m.action.unwrap().destination.as_deref(), Some("details"));
    }
}
