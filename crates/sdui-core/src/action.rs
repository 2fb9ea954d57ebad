#![forbid(unsafe_code)]

//! Runtime actions: the closed, validated form of wire click actions.
//!
//! The wire [`ClickAction`] is an open record; [`Action::decode`] checks
//! the per-kind required fields once, at the decode boundary, and yields
//! `None` for anything unknown or incomplete. A component holding no
//! action simply does nothing when triggered — malformed server data
//! degrades to inertness, never to an error.

use sdui_schema::{ClickAction, FieldValue, PayloadRequirement};
use tracing::debug;

/// A fully-validated action attached to an interactive component.
#[derive(Debug, Clone)]
pub enum Action {
    /// Fetch the screen at `destination` (through the cache) and replace
    /// the active tree wholesale.
    Navigate { destination: String },
    /// Submit collected payload to `destination`; the response is a
    /// change set applied to the live tree.
    SubmitForChanges {
        destination: String,
        requirements: Vec<PayloadRequirement>,
    },
    /// Submit collected payload to `destination`; the response is a full
    /// screen that replaces the active tree.
    SubmitForScreen {
        destination: String,
        requirements: Vec<PayloadRequirement>,
    },
    /// Apply `changes` only if every entry of `checks` passes.
    CheckThenMutate {
        checks: Vec<FieldValue>,
        changes: Vec<FieldValue>,
    },
    /// Apply `changes` immediately.
    Mutate { changes: Vec<FieldValue> },
    /// Present the modal registered under `destination`.
    TriggerModal { destination: String },
    /// Present the alert registered under `destination`.
    TriggerAlert { destination: String },
}

impl Action {
    /// Decode a wire action, enforcing per-kind required fields.
    ///
    /// `NAVIGATION` (tap gesture) and `REQUEST_WITH_SCREEN_CHANGE`
    /// (button) are the same runtime behavior and both decode to
    /// [`Action::Navigate`].
    #[must_use]
    pub fn decode(raw: &ClickAction) -> Option<Self> {
        let action = match raw.kind.as_str() {
            "NAVIGATION" | "REQUEST_WITH_SCREEN_CHANGE" => Self::Navigate {
                destination: raw.destination.clone()?,
            },
            "REQUEST_WITH_PAYLOAD_AND_UI_CHANGES" => Self::SubmitForChanges {
                destination: raw.destination.clone()?,
                requirements: raw.payload_requirements.clone()?,
            },
            "REQUEST_WITH_PAYLOAD_AND_SCREEN_CHANGE" => Self::SubmitForScreen {
                destination: raw.destination.clone()?,
                requirements: raw.payload_requirements.clone()?,
            },
            "CHECK_WITH_UI_CHANGES" => Self::CheckThenMutate {
                checks: raw.checked_fields.clone()?,
                changes: raw.field_changes.clone()?,
            },
            "UI_CHANGES" => Self::Mutate {
                changes: raw.field_changes.clone()?,
            },
            "TRIGGER_MODAL" => Self::TriggerModal {
                destination: raw.destination.clone()?,
            },
            "TRIGGER_ALERT" => Self::TriggerAlert {
                destination: raw.destination.clone()?,
            },
            other => {
                debug!(kind = other, "unknown action kind, dropping");
                return None;
            }
        };
        Some(action)
    }
}
