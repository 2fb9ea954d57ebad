#![forbid(unsafe_code)]

//! Core interpretation engine for SDUI.
//!
//! Turns wire screens ([`sdui_schema::ViewNode`]) into a live, mutable
//! component tree, keeps an addressable registry of rendered components,
//! and applies the filtered modifier pipeline. The companion
//! `sdui-runtime` crate adds the action resolver, screen cache, and
//! transport on top.
//!
//! Error philosophy (deliberate, protocol-level): degrade, never abort.
//! Malformed wire data becomes an invisible placeholder, a no-op
//! modifier, or an inert action; lookup misses during mutation are
//! silent per-item skips. Decode and mutation entry points therefore do
//! not return `Result` — there is no failure to propagate, only
//! fallbacks, each logged via `tracing`.

pub mod action;
pub mod component;
pub mod decode;
pub mod modifier;
pub mod mutate;
pub mod payload;
pub mod registry;
pub mod render;
pub mod validate;

pub use action::Action;
pub use component::{Component, ComponentKind, Handle, Tab, generated_id};
pub use decode::{decode, decode_modifier};
pub use modifier::{Color, FontStyle, Modifier, ModifierKind, Shape};
pub use mutate::{apply_changes, check_fields, parse_wire_bool};
pub use payload::{MISSING_COMPONENT, build_payload};
pub use registry::{Registry, SharedRegistry};
pub use render::{RenderBackend, render};
pub use validate::InputValidator;
