//! View nodes: the recursive screen document.

use serde::{Deserialize, Serialize};

use crate::action::ClickAction;
use crate::modifier::ModifierNode;

/// One node of a server-described screen.
///
/// `kind` (wire name `type`) discriminates the component variant; every
/// other field is optional and only meaningful for some kinds. `children`
/// and `tab_views` make the shape recursive.
///
/// `id` is the server-assigned stable identity used to target the node
/// with later field mutations. Servers may omit it; the decoder then
/// generates one (such nodes cannot be targeted, which is fine for
/// purely static content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ViewNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Vec<ModifierNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_views: Option<Vec<TabNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ClickAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl ViewNode {
    /// A bare node with just a kind, as servers send for SPACER and the
    /// client synthesizes for placeholders.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// A TEXT node carrying `text`, the shape used for fallback screens.
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            kind: "TEXT".to_owned(),
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// One page of a TABVIEW: tab bar metadata plus the page's subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabNode {
    pub name: String,
    pub icon: String,
    pub view: ViewNode,
}

/// Server-declared input validator. Only `"REGEX"` is currently spoken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
