#![forbid(unsafe_code)]

//! Screen cache with fixed time-to-live.
//!
//! One entry per route, overwrite-on-refresh, no eviction. A read within
//! the TTL serves the cached wire document without touching the network;
//! a stale or missing entry refetches through the [`Transport`] and
//! overwrites the slot.
//!
//! # Invariants
//!
//! 1. **No poisoning**: a failed fetch stores nothing. The caller gets
//!    the "Connection failed!" placeholder and the next read tries the
//!    network again.
//! 2. **Last write wins**: there is no single-flight coalescing. `get`
//!    takes `&mut self`, so within one session overlapping fetches for a
//!    route cannot interleave at all; across sessions a double fetch is
//!    an idempotent re-read and the later store overwrites.

use std::collections::HashMap;

use sdui_schema::ViewNode;
use tracing::{debug, warn};
use web_time::{Duration, Instant};

use crate::transport::Transport;

/// Fixed screen time-to-live.
pub const SCREEN_TTL: Duration = Duration::from_secs(15);

/// Text shown when the origin service cannot be reached.
pub const CONNECTION_FAILED: &str = "Connection failed!";

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    node: ViewNode,
}

/// Per-route cache of the most recently fetched screens.
#[derive(Debug)]
pub struct ScreenCache {
    entries: HashMap<String, CacheEntry, ahash::RandomState>,
    ttl: Duration,
}

impl Default for ScreenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
            ttl: SCREEN_TTL,
        }
    }

    /// Serve `route` from cache or fetch it fresh.
    ///
    /// Never fails: a transport error resolves to the placeholder screen
    /// and leaves the cache untouched.
    pub async fn get<T>(&mut self, transport: &T, route: &str) -> ViewNode
    where
        T: Transport + ?Sized,
    {
        self.get_at(transport, route, Instant::now()).await
    }

    /// [`ScreenCache::get`] with an explicit clock reading, for embedders
    /// (and tests) that control time themselves.
    pub async fn get_at<T>(&mut self, transport: &T, route: &str, now: Instant) -> ViewNode
    where
        T: Transport + ?Sized,
    {
        if let Some(entry) = self.entries.get(route)
            && now.duration_since(entry.fetched_at) <= self.ttl
        {
            debug!(route, "screen cache hit");
            return entry.node.clone();
        }

        match transport.fetch_screen(route).await {
            Ok(node) => {
                debug!(route, "screen fetched, cache updated");
                self.entries.insert(
                    route.to_owned(),
                    CacheEntry {
                        fetched_at: now,
                        node: node.clone(),
                    },
                );
                node
            }
            Err(err) => {
                warn!(route, %err, "screen fetch failed, serving placeholder");
                connection_failed_screen()
            }
        }
    }

    /// Number of cached routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fallback screen served on transport failure: a plain text node,
/// freshly identified so it can never collide with registered ids.
#[must_use]
pub fn connection_failed_screen() -> ViewNode {
    ViewNode::text(sdui_core::generated_id(), CONNECTION_FAILED)
}
