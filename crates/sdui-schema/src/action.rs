//! Click actions: declarative behavior attached to interactive nodes.

use serde::{Deserialize, Serialize};

use crate::payload::FieldValue;

/// A server-declared action, fired on button press or tap.
///
/// Known `type` literals: `NAVIGATION`, `REQUEST_WITH_SCREEN_CHANGE`,
/// `REQUEST_WITH_PAYLOAD_AND_UI_CHANGES`,
/// `REQUEST_WITH_PAYLOAD_AND_SCREEN_CHANGE`, `CHECK_WITH_UI_CHANGES`,
/// `UI_CHANGES`, `TRIGGER_MODAL`, `TRIGGER_ALERT`. Which optional fields
/// each requires is enforced by the action decoder in `sdui-core`; an
/// unknown or incomplete action simply does nothing when triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClickAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_requirements: Option<Vec<PayloadRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_fields: Option<Vec<FieldValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_changes: Option<Vec<FieldValue>>,
}

/// Instruction to collect one field from a registered component before
/// submitting: "include component `id` (of kind `type`) in the payload".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRequirement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}
