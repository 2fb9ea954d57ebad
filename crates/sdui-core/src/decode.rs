#![forbid(unsafe_code)]

//! Wire-to-runtime decoder.
//!
//! `decode` is pure, recursive, and total: it never fails. An
//! unrecognized `type` or a missing required field degrades the subtree
//! to an invisible [`Component::Empty`] placeholder instead of aborting
//! the screen. Children and tab pages are decoded depth-first in server
//! order. Nothing here touches the registry — registration is a render
//! side effect, so a decoded-but-never-rendered subtree leaks no ids.

use sdui_schema::{ModifierNode, TabNode, ViewNode};
use tracing::debug;

use crate::action::Action;
use crate::component::{Component, Handle, Tab, generated_id};
use crate::modifier::{Color, FontStyle, Modifier, Shape};
use crate::validate::InputValidator;

/// Decode a wire node into a live component tree.
#[must_use]
pub fn decode(node: &ViewNode) -> Handle {
    decode_component(node).into_handle()
}

fn decode_component(node: &ViewNode) -> Component {
    // Required-field checks mirror the per-kind guards of the service
    // contract; any miss falls through to the Empty placeholder.
    let component = match node.kind.as_str() {
        "TEXT" => node.text.as_ref().map(|text| Component::Text {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            text: text.clone(),
        }),
        "IMAGE" => node.image_path.as_ref().map(|path| Component::Image {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            image_path: path.clone(),
        }),
        "BUTTON" => node.action.as_ref().map(|raw| Component::Button {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            text: node.text.clone().unwrap_or_default(),
            is_enabled: node.is_enabled.unwrap_or(true),
            action: Action::decode(raw),
        }),
        "LABEL" => match (&node.text, &node.icon) {
            (Some(text), Some(icon)) => Some(Component::Label {
                id: node_id(node),
                modifiers: decode_modifiers(node),
                text: text.clone(),
                icon: icon.clone(),
            }),
            _ => None,
        },
        "TEXT_INPUT" => Some(Component::TextInput {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            placeholder: node.text.clone(),
            validator: node.validator.as_ref().map(InputValidator::decode),
            input: String::new(),
            is_valid: false,
        }),
        "SLIDER" => match (node.range_start, node.range_end) {
            (Some(start), Some(end)) => Some(Component::Slider {
                id: node_id(node),
                modifiers: decode_modifiers(node),
                range_start: start,
                range_end: end,
                value: start,
            }),
            _ => None,
        },
        "SWITCH" => node.text.as_ref().map(|text| Component::Switch {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            text: text.clone(),
            is_on: false,
        }),
        "TABVIEW" => node.tab_views.as_ref().map(|tabs| Component::TabView {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            tabs: tabs.iter().map(decode_tab).collect(),
        }),
        "SPACER" => Some(Component::Spacer {
            id: node_id(node),
            modifiers: decode_modifiers(node),
        }),
        "CARD" => match (&node.text, &node.icon, &node.children) {
            (Some(text), Some(icon), Some(children)) => Some(Component::Card {
                id: node_id(node),
                modifiers: decode_modifiers(node),
                children: decode_children(children),
                text: text.clone(),
                icon: icon.clone(),
            }),
            _ => None,
        },
        "MODAL" => node.children.as_ref().map(|children| Component::Modal {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            children: decode_children(children),
            is_presented: false,
        }),
        "ALERT" => node.text.as_ref().map(|text| Component::Alert {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            text: text.clone(),
            message: node.message.clone().unwrap_or_default(),
            is_presented: false,
        }),
        "LIST" => node.children.as_ref().map(|children| Component::List {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            children: decode_children(children),
        }),
        "COLUMN" => node.children.as_ref().map(|children| Component::Column {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            children: decode_children(children),
        }),
        "ROW" => node.children.as_ref().map(|children| Component::Row {
            id: node_id(node),
            modifiers: decode_modifiers(node),
            children: decode_children(children),
        }),
        _ => None,
    };
    component.unwrap_or_else(|| {
        debug!(kind = %node.kind, id = ?node.id, "unparseable node, degrading to empty");
        Component::empty()
    })
}

fn decode_children(children: &[ViewNode]) -> Vec<Handle> {
    children.iter().map(decode).collect()
}

fn decode_tab(tab: &TabNode) -> Tab {
    Tab {
        name: tab.name.clone(),
        icon: tab.icon.clone(),
        page: decode(&tab.view),
    }
}

fn node_id(node: &ViewNode) -> String {
    match node.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => generated_id(),
    }
}

fn decode_modifiers(node: &ViewNode) -> Vec<Modifier> {
    node.modifier
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(decode_modifier)
        .collect()
}

/// Decode one wire modifier; same permissive policy as [`decode`].
#[must_use]
pub fn decode_modifier(node: &ModifierNode) -> Modifier {
    let modifier = match node.kind.as_str() {
        "FOREGROUND_COLOR" => node.color.as_deref().map(|c| Modifier::ForegroundColor {
            color: Color::from_wire(Some(c)),
        }),
        "BACKGROUND_COLOR" => node.color.as_deref().map(|c| Modifier::BackgroundColor {
            color: Color::from_wire(Some(c)),
        }),
        "FONTSIZE" => node.font_size.map(|size| Modifier::FontSize { size }),
        "FONTSTYLE" => node
            .font_style
            .as_deref()
            .and_then(FontStyle::from_wire)
            .map(|style| Modifier::FontStyle { style }),
        "PADDING" => Some(Modifier::Padding),
        "SIZE" => node.width.map(|width| Modifier::Size {
            width,
            height: node.height,
        }),
        "BORDER" => Some(Modifier::Border {
            color: node.color.as_deref().map(|c| Color::from_wire(Some(c))),
            width: node.border_width,
        }),
        "SHADOW" => Some(Modifier::Shadow {
            color: node.color.as_deref().map(|c| Color::from_wire(Some(c))),
            radius: node.radius,
            x: node.x,
            y: node.y,
        }),
        "SHAPE" => node
            .shape
            .as_deref()
            .and_then(Shape::from_wire)
            .map(|shape| Modifier::Shape {
                shape,
                radius: node.radius,
                stroke: node.stroke,
                color: node.color.as_deref().map(|c| Color::from_wire(Some(c))),
            }),
        "CLICKABLE" => node
            .action
            .as_ref()
            .and_then(Action::decode)
            .map(|action| Modifier::Clickable { action }),
        _ => None,
    };
    modifier.unwrap_or_else(|| {
        debug!(kind = %node.kind, "unparseable modifier, degrading to no-op");
        Modifier::Empty
    })
}
