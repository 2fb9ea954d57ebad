#![forbid(unsafe_code)]

//! Runtime layer for SDUI: sessions, action resolution, screen caching,
//! and the transport seam.
//!
//! The flow, end to end: a [`Session`] asks the [`ScreenCache`] for a
//! route; the cache serves its entry or fetches through the
//! [`Transport`]; the wire document is decoded by `sdui-core` into a
//! live tree which the UI layer renders (populating the registry); user
//! interaction hands a decoded [`Action`](sdui_core::Action) back to
//! [`Session::trigger`], which gathers payloads, talks to the service,
//! and applies the resulting change set — or replaces the screen
//! wholesale.
//!
//! Everything here degrades instead of failing: transport errors become
//! the "Connection failed!" placeholder screen or an empty change set,
//! and per-item lookup misses never abort a batch.

pub mod cache;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod session;
pub mod transport;

pub use cache::{CONNECTION_FAILED, SCREEN_TTL, ScreenCache, connection_failed_screen};
pub use error::TransportError;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use session::Session;
pub use transport::Transport;
