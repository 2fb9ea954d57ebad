#![forbid(unsafe_code)]

//! Wire schema for the SDUI protocol.
//!
//! These are the JSON shapes the origin server produces (screens, modifier
//! descriptions, click actions) and the client sends back (component
//! payloads). They are pure data contracts: no decoding logic, no runtime
//! state. The interpretation into live components lives in `sdui-core`.
//!
//! # Invariants
//!
//! 1. **Bit-exact wire names**: field names and `type` discriminator
//!    literals match the deployed service and stored fixture screens
//!    (`payloadRequirements`, `imagePath`, `isPresented`, ...). Renames
//!    here are protocol changes, not refactors.
//!
//! 2. **Open shapes**: every non-discriminator field is optional and
//!    unknown fields are ignored. Shape validation happens at decode time
//!    in `sdui-core`, never at deserialization time — a syntactically
//!    valid JSON document always deserializes.

pub mod action;
pub mod modifier;
pub mod node;
pub mod payload;

pub use action::{ClickAction, PayloadRequirement};
pub use modifier::ModifierNode;
pub use node::{TabNode, Validator, ViewNode};
pub use payload::{ChangeSet, ComponentPayload, FieldValue, PayloadField};
