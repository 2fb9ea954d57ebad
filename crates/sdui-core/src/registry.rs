#![forbid(unsafe_code)]

//! The component registry: id -> live instance lookup for mutation.
//!
//! # Invariants
//!
//! 1. **First-write-wins**: registering a second component under an
//!    already-held id is a no-op while the first is still alive. The
//!    earliest-registered instance stays authoritative.
//! 2. **Non-owning**: entries are `Weak`; the registry never keeps a
//!    component alive after its screen is discarded. A dead entry behaves
//!    exactly like a missing one (and its slot may be re-registered).
//! 3. **Single generation**: one registry serves one rendered tree. A
//!    wholesale screen replacement clears it before the new tree renders,
//!    so stale ids cannot be targeted across screens.
//!
//! The registry is an explicitly constructed, injected value — there is
//! no process-wide global. Share it as a [`SharedRegistry`] between the
//! session and the rendering layer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::component::{Component, ComponentKind, Handle};

/// Lookup table from component id to live instance.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Weak<RefCell<Component>>, ahash::RandomState>,
}

/// Registry handle shared between the session and render entry points.
pub type SharedRegistry = Rc<RefCell<Registry>>;

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a registry already wrapped for sharing.
    #[must_use]
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register a component under its id. Idempotent: if the id is held
    /// by a still-live component, the call is a no-op (not an overwrite).
    pub fn register(&mut self, handle: &Handle) {
        let id = handle.borrow().id().to_owned();
        if let Some(existing) = self.entries.get(&id)
            && existing.strong_count() > 0
        {
            trace!(%id, "duplicate registration ignored");
            return;
        }
        self.entries.insert(id, Rc::downgrade(handle));
    }

    /// Look up a live component by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Handle> {
        self.entries.get(id).and_then(Weak::upgrade)
    }

    /// Look up a live component by id, requiring a specific variant.
    ///
    /// A wrong-variant hit is indistinguishable from a miss — mutation
    /// code treats both as a silent skip.
    #[must_use]
    pub fn find_as(&self, id: &str, kind: ComponentKind) -> Option<Handle> {
        self.find(id).filter(|h| h.borrow().kind() == kind)
    }

    /// Drop every entry. Called on wholesale screen replacement.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries, live or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
