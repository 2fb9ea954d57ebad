#![forbid(unsafe_code)]

//! The transport seam between the engine and the origin service.
//!
//! The two submit calls return different shapes (a change set vs. a full
//! screen) even though the service distinguishes them only by which
//! endpoint was called, not by any response envelope tag. That coupling
//! is part of the deployed protocol and is preserved here as two
//! separate methods rather than a discriminated response type.
//!
//! Futures are `?Send`: the engine runs on a single logical UI thread
//! and callers hold `Rc`-based tree state across awaits. Drive sessions
//! on a current-thread executor.

use async_trait::async_trait;
use sdui_schema::{ChangeSet, ComponentPayload, ViewNode};

use crate::error::TransportError;

/// Client-side view of the origin service.
#[async_trait(?Send)]
pub trait Transport {
    /// Resolve a screen name to its stored wire document.
    async fn fetch_screen(&self, route: &str) -> Result<ViewNode, TransportError>;

    /// Submit a collected payload; the response is a batch of field
    /// mutations for the *current* tree.
    async fn submit_for_changes(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ChangeSet, TransportError>;

    /// Submit a collected payload; the response is a full screen that
    /// replaces the current tree.
    async fn submit_for_screen(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ViewNode, TransportError>;
}
