#![forbid(unsafe_code)]

//! Field-level mutation and conditional checks.
//!
//! Change sets arrive as wire [`FieldValue`]s: `{id, type, fieldName,
//! value}` with `value` always serialized as text. The wire `fieldName`
//! strings are translated into per-kind field enums at this boundary, so
//! the actual mutation is an exhaustive match instead of stringly
//! dispatch; the wire literals themselves never change.
//!
//! # Invariants
//!
//! 1. Changes are applied independently and non-transactionally: a
//!    missing id, wrong kind, or unknown field name skips that entry and
//!    the rest of the batch still applies.
//! 2. Boolean-typed fields parse `"true"`/`"false"`; any other text is
//!    `false`.
//! 3. `check_fields` is a pure read: all checks are evaluated before any
//!    mutation of the same trigger is applied.

use sdui_schema::FieldValue;
use tracing::debug;

use crate::component::{Component, ComponentKind};
use crate::registry::Registry;

/// Mutable fields of a TEXT component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Text,
}

/// Mutable fields of an IMAGE component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    ImagePath,
}

/// Mutable fields of a BUTTON component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonField {
    Text,
    /// Wire name `isActive`, mapped onto the button's `is_enabled`.
    IsActive,
}

/// Mutable fields of a LABEL component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Text,
    Icon,
}

/// Mutable fields of a CARD component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Text,
    Icon,
}

/// Mutable fields of MODAL and ALERT components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentedField {
    IsPresented,
}

impl TextField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        matches!(name, "text").then_some(Self::Text)
    }
}

impl ImageField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        matches!(name, "imagePath").then_some(Self::ImagePath)
    }
}

impl ButtonField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "isActive" => Some(Self::IsActive),
            _ => None,
        }
    }
}

impl LabelField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "icon" => Some(Self::Icon),
            _ => None,
        }
    }
}

impl CardField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "icon" => Some(Self::Icon),
            _ => None,
        }
    }
}

impl PresentedField {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        matches!(name, "isPresented").then_some(Self::IsPresented)
    }
}

/// Wire boolean: `"true"` is true, everything else is false.
#[must_use]
pub fn parse_wire_bool(value: &str) -> bool {
    value == "true"
}

/// Apply a batch of field changes against the registry.
///
/// Each entry resolves independently; misses and unknown fields are
/// logged no-ops. Identity and variant kind are never touched.
pub fn apply_changes(registry: &Registry, changes: &[FieldValue]) {
    for change in changes {
        apply_change(registry, change);
    }
}

fn apply_change(registry: &Registry, change: &FieldValue) {
    let Some(kind) = ComponentKind::from_wire(&change.kind) else {
        debug!(kind = %change.kind, id = %change.id, "change targets unknown kind");
        return;
    };
    let Some(handle) = registry.find_as(&change.id, kind) else {
        debug!(id = %change.id, kind = %change.kind, "change target not registered");
        return;
    };
    let mut component = handle.borrow_mut();
    match &mut *component {
        Component::Text { text, .. } => {
            if TextField::parse(&change.field_name).is_some() {
                *text = change.value.clone();
            }
        }
        Component::Image { image_path, .. } => {
            if ImageField::parse(&change.field_name).is_some() {
                *image_path = change.value.clone();
            }
        }
        Component::Button {
            text, is_enabled, ..
        } => match ButtonField::parse(&change.field_name) {
            Some(ButtonField::Text) => *text = change.value.clone(),
            Some(ButtonField::IsActive) => *is_enabled = parse_wire_bool(&change.value),
            None => debug!(field = %change.field_name, "unknown button field"),
        },
        Component::Label { text, icon, .. } => match LabelField::parse(&change.field_name) {
            Some(LabelField::Text) => *text = change.value.clone(),
            Some(LabelField::Icon) => *icon = change.value.clone(),
            None => debug!(field = %change.field_name, "unknown label field"),
        },
        Component::Card { text, icon, .. } => match CardField::parse(&change.field_name) {
            Some(CardField::Text) => *text = change.value.clone(),
            Some(CardField::Icon) => *icon = change.value.clone(),
            None => debug!(field = %change.field_name, "unknown card field"),
        },
        Component::Modal { is_presented, .. } | Component::Alert { is_presented, .. } => {
            if PresentedField::parse(&change.field_name).is_some() {
                *is_presented = parse_wire_bool(&change.value);
            }
        }
        // No server-mutable fields on the remaining variants.
        _ => debug!(kind = %change.kind, "kind has no mutable fields"),
    }
}

/// Evaluate a conditional action's checks: logical AND over all entries.
///
/// The only check the protocol knows today is a text input's `isValid`
/// flag compared against a boolean-as-text literal. Unknown kinds or
/// field names fail the check (and therefore the whole conjunction), as
/// does a missing component. An empty list passes.
#[must_use]
pub fn check_fields(registry: &Registry, checks: &[FieldValue]) -> bool {
    checks.iter().all(|check| check_field(registry, check))
}

fn check_field(registry: &Registry, check: &FieldValue) -> bool {
    if check.kind != ComponentKind::TextInput.wire_name() || check.field_name != "isValid" {
        debug!(kind = %check.kind, field = %check.field_name, "unsupported check");
        return false;
    }
    let Some(handle) = registry.find_as(&check.id, ComponentKind::TextInput) else {
        return false;
    };
    let component = handle.borrow();
    match &*component {
        Component::TextInput { is_valid, .. } => is_valid.to_string() == check.value,
        _ => false,
    }
}
