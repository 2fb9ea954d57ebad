#![forbid(unsafe_code)]

//! The runtime component tree.
//!
//! A [`Component`] is one node of the live, mutable tree decoded from a
//! server screen. The closed set of variants mirrors the wire `type`
//! discriminators; each variant carries its modifier list plus its own
//! mutable field surface (the only state the mutation pipeline may touch).
//!
//! # Invariants
//!
//! 1. **Identity is fixed**: `id` is assigned once at decode time (server
//!    id when present and non-empty, generated otherwise) and never
//!    changes. Mutation updates field values, never identity or variant.
//! 2. **Ownership**: the tree owns its nodes via [`Handle`]
//!    (`Rc<RefCell<_>>`); the registry holds `Weak` references only, so a
//!    discarded screen cannot survive as a stale mutation target.
//! 3. **Single UI thread**: handles are deliberately `!Send`; all reads
//!    and mutations happen on the thread that owns the tree.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::action::Action;
use crate::modifier::{Modifier, ModifierKind};
use crate::validate::InputValidator;

/// Shared, interiorly-mutable handle to a tree node.
pub type Handle = Rc<RefCell<Component>>;

/// Counter backing generated component ids.
static GENERATED_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Produce a fresh process-unique component id.
///
/// Used for nodes the server left unidentified and for fallback
/// placeholders; the `#` prefix keeps generated ids visually distinct
/// from server-assigned ones.
#[must_use]
pub fn generated_id() -> String {
    format!("#gen-{}", GENERATED_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Discriminator over the closed component set; also the `type` literal
/// vocabulary of field values and payload requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Text,
    Image,
    Button,
    Label,
    TextInput,
    Slider,
    Switch,
    TabView,
    Spacer,
    Card,
    Modal,
    Alert,
    List,
    Column,
    Row,
    Empty,
}

impl ComponentKind {
    /// The wire `type` literal for this kind.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Button => "BUTTON",
            Self::Label => "LABEL",
            Self::TextInput => "TEXT_INPUT",
            Self::Slider => "SLIDER",
            Self::Switch => "SWITCH",
            Self::TabView => "TABVIEW",
            Self::Spacer => "SPACER",
            Self::Card => "CARD",
            Self::Modal => "MODAL",
            Self::Alert => "ALERT",
            Self::List => "LIST",
            Self::Column => "COLUMN",
            Self::Row => "ROW",
            Self::Empty => "EMPTY",
        }
    }

    /// Parse a wire `type` literal.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "TEXT" => Some(Self::Text),
            "IMAGE" => Some(Self::Image),
            "BUTTON" => Some(Self::Button),
            "LABEL" => Some(Self::Label),
            "TEXT_INPUT" => Some(Self::TextInput),
            "SLIDER" => Some(Self::Slider),
            "SWITCH" => Some(Self::Switch),
            "TABVIEW" => Some(Self::TabView),
            "SPACER" => Some(Self::Spacer),
            "CARD" => Some(Self::Card),
            "MODAL" => Some(Self::Modal),
            "ALERT" => Some(Self::Alert),
            "LIST" => Some(Self::List),
            "COLUMN" => Some(Self::Column),
            "ROW" => Some(Self::Row),
            "EMPTY" => Some(Self::Empty),
            _ => None,
        }
    }

    /// The fixed modifier allow-list for this kind.
    ///
    /// This is a whitelist: modifiers outside the list are silently
    /// dropped at render time, never applied.
    #[must_use]
    pub const fn allowed_modifiers(self) -> &'static [ModifierKind] {
        use ModifierKind as M;
        const TEXTUAL: &[ModifierKind] = &[
            M::ForegroundColor,
            M::BackgroundColor,
            M::FontSize,
            M::FontStyle,
            M::Padding,
            M::Border,
            M::Shadow,
        ];
        const FRAMED: &[ModifierKind] =
            &[M::ForegroundColor, M::BackgroundColor, M::Padding, M::Border];
        match self {
            Self::Text | Self::Label | Self::TextInput => TEXTUAL,
            Self::Image => &[M::Padding, M::Size, M::Border, M::Shadow, M::Shape],
            Self::Button => &[
                M::ForegroundColor,
                M::BackgroundColor,
                M::Padding,
                M::Size,
                M::Border,
                M::Shadow,
                M::Shape,
                M::Clickable,
            ],
            Self::Slider | Self::Switch | Self::Card => &[M::Padding],
            Self::Spacer | Self::Column | Self::Row => FRAMED,
            Self::List => &[M::ForegroundColor, M::BackgroundColor, M::Padding],
            Self::TabView | Self::Modal | Self::Alert | Self::Empty => &[],
        }
    }
}

/// One page of a tab view.
#[derive(Debug, Clone)]
pub struct Tab {
    pub name: String,
    pub icon: String,
    pub page: Handle,
}

/// A live tree node. See the module docs for the ownership and identity
/// invariants; per-variant field comments mark what is mutable.
#[derive(Debug)]
pub enum Component {
    Text {
        id: String,
        modifiers: Vec<Modifier>,
        /// Mutable via `fieldName: "text"`.
        text: String,
    },
    Image {
        id: String,
        modifiers: Vec<Modifier>,
        /// Mutable via `fieldName: "imagePath"`.
        image_path: String,
    },
    Button {
        id: String,
        modifiers: Vec<Modifier>,
        /// Mutable via `fieldName: "text"`.
        text: String,
        /// Mutable via `fieldName: "isActive"`.
        is_enabled: bool,
        /// Fixed at construction; `None` when the wire action was
        /// present but malformed (the button is inert).
        action: Option<Action>,
    },
    Label {
        id: String,
        modifiers: Vec<Modifier>,
        /// Mutable via `fieldName: "text"`.
        text: String,
        /// Mutable via `fieldName: "icon"`.
        icon: String,
    },
    TextInput {
        id: String,
        modifiers: Vec<Modifier>,
        /// Placeholder text shown while `input` is empty. Fixed.
        placeholder: Option<String>,
        /// Fixed at construction.
        validator: Option<InputValidator>,
        /// Current user input; update through
        /// [`Component::set_text_input`] so `is_valid` stays in sync.
        input: String,
        /// Checked by conditional actions. `false` until a validator
        /// accepts the input; stays `false` without a validator.
        is_valid: bool,
    },
    Slider {
        id: String,
        modifiers: Vec<Modifier>,
        range_start: i64,
        range_end: i64,
        /// Current position, initialized to `range_start`. No wire field
        /// targets it today.
        value: i64,
    },
    Switch {
        id: String,
        modifiers: Vec<Modifier>,
        text: String,
        /// Toggled by the user through the rendering layer.
        is_on: bool,
    },
    TabView {
        id: String,
        modifiers: Vec<Modifier>,
        tabs: Vec<Tab>,
    },
    Spacer {
        id: String,
        modifiers: Vec<Modifier>,
    },
    Card {
        id: String,
        modifiers: Vec<Modifier>,
        children: Vec<Handle>,
        /// Mutable via `fieldName: "text"`.
        text: String,
        /// Mutable via `fieldName: "icon"`.
        icon: String,
    },
    Modal {
        id: String,
        modifiers: Vec<Modifier>,
        children: Vec<Handle>,
        /// Mutable via `fieldName: "isPresented"`.
        is_presented: bool,
    },
    Alert {
        id: String,
        modifiers: Vec<Modifier>,
        text: String,
        message: String,
        /// Mutable via `fieldName: "isPresented"`.
        is_presented: bool,
    },
    List {
        id: String,
        modifiers: Vec<Modifier>,
        children: Vec<Handle>,
    },
    Column {
        id: String,
        modifiers: Vec<Modifier>,
        children: Vec<Handle>,
    },
    Row {
        id: String,
        modifiers: Vec<Modifier>,
        children: Vec<Handle>,
    },
    /// Invisible placeholder for unparseable subtrees.
    Empty { id: String },
}

impl Component {
    /// Stable identity, unique within one rendered tree.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Text { id, .. }
            | Self::Image { id, .. }
            | Self::Button { id, .. }
            | Self::Label { id, .. }
            | Self::TextInput { id, .. }
            | Self::Slider { id, .. }
            | Self::Switch { id, .. }
            | Self::TabView { id, .. }
            | Self::Spacer { id, .. }
            | Self::Card { id, .. }
            | Self::Modal { id, .. }
            | Self::Alert { id, .. }
            | Self::List { id, .. }
            | Self::Column { id, .. }
            | Self::Row { id, .. }
            | Self::Empty { id } => id,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Text { .. } => ComponentKind::Text,
            Self::Image { .. } => ComponentKind::Image,
            Self::Button { .. } => ComponentKind::Button,
            Self::Label { .. } => ComponentKind::Label,
            Self::TextInput { .. } => ComponentKind::TextInput,
            Self::Slider { .. } => ComponentKind::Slider,
            Self::Switch { .. } => ComponentKind::Switch,
            Self::TabView { .. } => ComponentKind::TabView,
            Self::Spacer { .. } => ComponentKind::Spacer,
            Self::Card { .. } => ComponentKind::Card,
            Self::Modal { .. } => ComponentKind::Modal,
            Self::Alert { .. } => ComponentKind::Alert,
            Self::List { .. } => ComponentKind::List,
            Self::Column { .. } => ComponentKind::Column,
            Self::Row { .. } => ComponentKind::Row,
            Self::Empty { .. } => ComponentKind::Empty,
        }
    }

    /// The decoded, unfiltered modifier list in server order.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Self::Text { modifiers, .. }
            | Self::Image { modifiers, .. }
            | Self::Button { modifiers, .. }
            | Self::Label { modifiers, .. }
            | Self::TextInput { modifiers, .. }
            | Self::Slider { modifiers, .. }
            | Self::Switch { modifiers, .. }
            | Self::TabView { modifiers, .. }
            | Self::Spacer { modifiers, .. }
            | Self::Card { modifiers, .. }
            | Self::Modal { modifiers, .. }
            | Self::Alert { modifiers, .. }
            | Self::List { modifiers, .. }
            | Self::Column { modifiers, .. }
            | Self::Row { modifiers, .. } => modifiers,
            Self::Empty { .. } => &[],
        }
    }

    /// Shorthand for the kind's allow-list.
    #[must_use]
    pub const fn allowed_modifiers(&self) -> &'static [ModifierKind] {
        self.kind().allowed_modifiers()
    }

    /// Direct children for container variants; empty for leaves. Tab
    /// pages are reachable through [`Component::tabs`] instead, since the
    /// rendering layer decides which pages to materialize.
    #[must_use]
    pub fn children(&self) -> &[Handle] {
        match self {
            Self::Card { children, .. }
            | Self::Modal { children, .. }
            | Self::List { children, .. }
            | Self::Column { children, .. }
            | Self::Row { children, .. } => children,
            _ => &[],
        }
    }

    /// Tab descriptors for `TabView`; empty for every other variant.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        match self {
            Self::TabView { tabs, .. } => tabs,
            _ => &[],
        }
    }

    /// Update a text input's content and re-evaluate its validity.
    ///
    /// No-op on other variants; the rendering layer routes user keystrokes
    /// here.
    pub fn set_text_input(&mut self, new_input: impl Into<String>) {
        if let Self::TextInput {
            validator,
            input,
            is_valid,
            ..
        } = self
        {
            *input = new_input.into();
            *is_valid = validator.as_ref().is_some_and(|v| v.accepts(input));
        }
    }

    /// Fallback placeholder with a fresh generated id.
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty { id: generated_id() }
    }

    /// Wrap this component into a tree handle.
    #[must_use]
    pub fn into_handle(self) -> Handle {
        Rc::new(RefCell::new(self))
    }
}
