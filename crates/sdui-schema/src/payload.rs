//! Field values, change sets, and outgoing component payloads.

use serde::{Deserialize, Serialize};

/// One field-level value, used both as a mutation instruction (change
/// sets, `fieldChanges`) and as a check description (`checkedFields`).
///
/// `value` is always text on the wire regardless of the target field's
/// native type; boolean targets parse `"true"`/`"false"` and treat
/// anything else as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub field_name: String,
    pub value: String,
}

impl FieldValue {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        field_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}

/// Response body of a UI-changes submission: a batch of field mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChangeSet {
    pub changes: Vec<FieldValue>,
}

/// Outgoing payload for one component, collected from the registry before
/// a submit action fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Vec<PayloadField>,
}

/// A single collected field inside a [`ComponentPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadField {
    pub field_name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_round_trip() {
        let json = r#"{"id": "b1", "type": "BUTTON", "fieldName": "isActive", "value": "false"}"#;
        let fv: FieldValue = serde_json::from_str(json).unwrap();
        assert_eq!(fv.field_name, "isActive");
        let out = serde_json::to_string(&fv).unwrap();
        assert!(out.contains("\"fieldName\":\"isActive\""));
        assert!(out.contains("\"type\":\"BUTTON\""));
    }

    #[test]
    fn change_set_wire_shape() {
        let json = r#"{"changes": [
            {"id": "l1", "type": "LABEL", "fieldName": "text", "value": "done"}
        ]}"#;
        let cs: ChangeSet = serde_json::from_str(json).unwrap();
        assert_eq!(cs.changes.len(), 1);
        assert_eq!(cs.changes[0].value, "done");
    }

    #[test]
    fn component_payload_serializes_as_sent() {
        let p = ComponentPayload {
            id: "user".into(),
            kind: "TEXT_INPUT".into(),
            payload: vec![PayloadField {
                field_name: "text".into(),
                value: "alice".into(),
            }],
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"id":"user","type":"TEXT_INPUT","payload":[{"fieldName":"text","value":"alice"}]}"#
        );
    }
}
