#![forbid(unsafe_code)]

//! Typed modifiers and the per-variant allow-list.
//!
//! A [`Modifier`] is the decoded, renderable form of a wire
//! [`ModifierNode`](sdui_schema::ModifierNode). Components carry their
//! modifier list unfiltered; filtering against the component's allow-list
//! happens at render time (see [`crate::render`]).
//!
//! # Invariants
//!
//! 1. The allow-list table is a whitelist, not a hint: a modifier kind
//!    outside a component's list is never applied and never reported.
//! 2. Filtering preserves the server's original modifier order.
//! 3. Decoded modifiers are immutable; there is no mutation surface here.

use crate::action::Action;

/// Discriminator for [`Modifier`], used by the allow-list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    ForegroundColor,
    BackgroundColor,
    FontSize,
    FontStyle,
    Padding,
    Size,
    Border,
    Shadow,
    Shape,
    Clickable,
    Empty,
}

impl ModifierKind {
    /// The wire `type` literal for this kind.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::ForegroundColor => "FOREGROUND_COLOR",
            Self::BackgroundColor => "BACKGROUND_COLOR",
            Self::FontSize => "FONTSIZE",
            Self::FontStyle => "FONTSTYLE",
            Self::Padding => "PADDING",
            Self::Size => "SIZE",
            Self::Border => "BORDER",
            Self::Shadow => "SHADOW",
            Self::Shape => "SHAPE",
            Self::Clickable => "CLICKABLE",
            Self::Empty => "EMPTY",
        }
    }
}

/// A decoded visual/behavioral decoration.
///
/// `Empty` is the fallback for unrecognized kinds and missing required
/// fields; applying it is a no-op by contract, and backends may skip it.
#[derive(Debug, Clone)]
pub enum Modifier {
    ForegroundColor { color: Color },
    BackgroundColor { color: Color },
    FontSize { size: i64 },
    FontStyle { style: FontStyle },
    Border { color: Option<Color>, width: Option<i64> },
    Shadow {
        color: Option<Color>,
        radius: Option<i64>,
        x: Option<i64>,
        y: Option<i64>,
    },
    Shape {
        shape: Shape,
        radius: Option<i64>,
        stroke: Option<i64>,
        color: Option<Color>,
    },
    Padding,
    Size { width: i64, height: Option<i64> },
    Clickable { action: Action },
    Empty,
}

impl Modifier {
    #[must_use]
    pub const fn kind(&self) -> ModifierKind {
        match self {
            Self::ForegroundColor { .. } => ModifierKind::ForegroundColor,
            Self::BackgroundColor { .. } => ModifierKind::BackgroundColor,
            Self::FontSize { .. } => ModifierKind::FontSize,
            Self::FontStyle { .. } => ModifierKind::FontStyle,
            Self::Border { .. } => ModifierKind::Border,
            Self::Shadow { .. } => ModifierKind::Shadow,
            Self::Shape { .. } => ModifierKind::Shape,
            Self::Padding => ModifierKind::Padding,
            Self::Size { .. } => ModifierKind::Size,
            Self::Clickable { .. } => ModifierKind::Clickable,
            Self::Empty => ModifierKind::Empty,
        }
    }
}

/// Closed color palette spoken by the service.
///
/// Unknown or absent wire strings resolve to `Black`, matching the
/// service's own fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    #[default]
    Black,
}

impl Color {
    /// Parse a wire color string; `None` or anything unrecognized is
    /// `Black`.
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("RED") => Self::Red,
            Some("BLUE") => Self::Blue,
            Some("GREEN") => Self::Green,
            Some("YELLOW") => Self::Yellow,
            _ => Self::Black,
        }
    }
}

/// Font style variants for the FONTSTYLE modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Bold,
    Italic,
    Underline,
}

impl FontStyle {
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "BOLD" => Some(Self::Bold),
            "ITALIC" => Some(Self::Italic),
            "UNDERLINE" => Some(Self::Underline),
            _ => None,
        }
    }
}

/// Clip shapes for the SHAPE modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Rectangle,
    RoundedRectangle,
    Capsule,
    Ellipse,
}

impl Shape {
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "CIRCLE" => Some(Self::Circle),
            "RECTANGLE" => Some(Self::Rectangle),
            "ROUNDED_RECTANGLE" => Some(Self::RoundedRectangle),
            "CAPSULE" => Some(Self::Capsule),
            "ELLIPSE" => Some(Self::Ellipse),
            _ => None,
        }
    }
}
