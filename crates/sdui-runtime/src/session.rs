#![forbid(unsafe_code)]

//! The session: one active screen, its registry, and action dispatch.
//!
//! A [`Session`] owns the pieces that were process-wide singletons in
//! earlier designs — transport, cache, registry, and the current tree —
//! as one explicitly constructed, injectable value.
//!
//! # Concurrency policy
//!
//! Every mutating entry point takes `&mut self`, so triggers and
//! navigations are serialized by the borrow checker: a second trigger
//! cannot start while one is awaiting the network, and the stale-screen
//! race resolves deterministically as "the last completed navigation
//! wins". Session futures hold `Rc` state across awaits and are
//! therefore `!Send`; drive them on a current-thread executor. No
//! `RefCell` borrow is ever held across an await.
//!
//! Within one trigger, conditional checks are fully evaluated before any
//! mutation of that trigger is applied.

use sdui_core::{
    Action, ComponentKind, Handle, RenderBackend, Registry, SharedRegistry, apply_changes,
    build_payload, check_fields, decode, render,
};
use sdui_schema::{FieldValue, ViewNode};
use tracing::{debug, warn};

use crate::cache::{ScreenCache, connection_failed_screen};
use crate::transport::Transport;

/// A live UI session against one origin service.
pub struct Session<T: Transport> {
    transport: T,
    registry: SharedRegistry,
    cache: ScreenCache,
    root: Handle,
    route: Option<String>,
}

impl<T: Transport> Session<T> {
    /// Create a session with an empty placeholder tree; call
    /// [`Session::navigate`] to load the first screen.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            registry: Registry::shared(),
            cache: ScreenCache::new(),
            root: sdui_core::Component::empty().into_handle(),
            route: None,
        }
    }

    /// The active tree's root.
    #[must_use]
    pub fn root(&self) -> &Handle {
        &self.root
    }

    /// The registry serving the active tree. Shared with the rendering
    /// layer; cleared and rebuilt on every screen replacement.
    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The screen name of the last completed navigation, if any.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Render the active tree: the one entry point the UI layer calls to
    /// obtain a displayable tree (registration + modifier application).
    pub fn render<B: RenderBackend>(&self, backend: &mut B) -> B::Output {
        render(&self.root, &self.registry, backend)
    }

    /// Navigate to a named screen: serve it from the cache (or fetch),
    /// then replace the active tree wholesale.
    pub async fn navigate(&mut self, route: &str) {
        let node = self.cache.get(&self.transport, route).await;
        self.route = Some(route.to_owned());
        self.replace_screen(&node);
    }

    /// Resolve one triggered action. Network-bound variants suspend; the
    /// resulting mutations are applied after the await, on the caller's
    /// thread.
    pub async fn trigger(&mut self, action: &Action) {
        match action {
            Action::Navigate { destination } => self.navigate(destination).await,
            Action::SubmitForChanges {
                destination,
                requirements,
            } => {
                let payload = build_payload(&self.registry.borrow(), requirements);
                match self
                    .transport
                    .submit_for_changes(destination, &payload)
                    .await
                {
                    Ok(change_set) => {
                        apply_changes(&self.registry.borrow(), &change_set.changes);
                    }
                    Err(err) => {
                        // Empty change set: the tree stays as it was.
                        warn!(route = %destination, %err, "submit failed, no changes applied");
                    }
                }
            }
            Action::SubmitForScreen {
                destination,
                requirements,
            } => {
                let payload = build_payload(&self.registry.borrow(), requirements);
                match self.transport.submit_for_screen(destination, &payload).await {
                    Ok(node) => self.replace_screen(&node),
                    Err(err) => {
                        warn!(route = %destination, %err, "submit failed, showing placeholder");
                        self.replace_screen(&connection_failed_screen());
                    }
                }
            }
            Action::CheckThenMutate { checks, changes } => {
                let registry = self.registry.borrow();
                if check_fields(&registry, checks) {
                    apply_changes(&registry, changes);
                } else {
                    debug!("conditional action checks failed, changes withheld");
                }
            }
            Action::Mutate { changes } => {
                apply_changes(&self.registry.borrow(), changes);
            }
            Action::TriggerModal { destination } => {
                self.present(destination, ComponentKind::Modal);
            }
            Action::TriggerAlert { destination } => {
                self.present(destination, ComponentKind::Alert);
            }
        }
    }

    /// Present the modal/alert registered under `id` by synthesizing the
    /// corresponding field change.
    fn present(&self, id: &str, kind: ComponentKind) {
        let change = FieldValue::new(id, kind.wire_name(), "isPresented", "true");
        apply_changes(&self.registry.borrow(), &[change]);
    }

    /// Wholesale screen replacement: clear the registry, decode the new
    /// tree. The old tree's components die with their last external
    /// handle; the registry's weak entries cannot keep them alive.
    fn replace_screen(&mut self, node: &ViewNode) {
        self.registry.borrow_mut().clear();
        self.root = decode(node);
        debug!(root = %self.root.borrow().id(), "screen replaced");
    }
}

impl<T: Transport> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("route", &self.route)
            .field("cached_routes", &self.cache.len())
            .finish_non_exhaustive()
    }
}
