#![forbid(unsafe_code)]

//! Payload collection: gathering field values before a submit action.
//!
//! The server declares, per action, which registered components must
//! contribute to the outgoing payload. Only text inputs are collectable
//! today; other kinds are silently skipped (absent from the payload, not
//! an error). A declared-but-unresolvable text input still produces an
//! entry, carrying a sentinel value the service recognizes.

use sdui_schema::{ComponentPayload, PayloadField, PayloadRequirement};
use tracing::debug;

use crate::component::{Component, ComponentKind};
use crate::registry::Registry;

/// Sentinel sent when a required component cannot be resolved.
pub const MISSING_COMPONENT: &str = "Missing Component!";

/// Collect the payload for a submit action from the registry.
#[must_use]
pub fn build_payload(
    registry: &Registry,
    requirements: &[PayloadRequirement],
) -> Vec<ComponentPayload> {
    let mut payload = Vec::with_capacity(requirements.len());
    for requirement in requirements {
        if requirement.kind != ComponentKind::TextInput.wire_name() {
            debug!(kind = %requirement.kind, "unsupported payload requirement, skipping");
            continue;
        }
        let value = registry
            .find_as(&requirement.id, ComponentKind::TextInput)
            .map_or_else(
                || MISSING_COMPONENT.to_owned(),
                |handle| match &*handle.borrow() {
                    Component::TextInput { input, .. } => input.clone(),
                    _ => MISSING_COMPONENT.to_owned(),
                },
            );
        payload.push(ComponentPayload {
            id: requirement.id.clone(),
            kind: requirement.kind.clone(),
            payload: vec![PayloadField {
                field_name: "text".to_owned(),
                value,
            }],
        });
    }
    payload
}
