#![forbid(unsafe_code)]

//! Transport-boundary errors.
//!
//! These are the only `Result`-shaped errors in the engine: they cross
//! the crate boundary between the session and whatever transport the
//! embedder supplies. Inside the session they immediately resolve to the
//! protocol's fallback values (placeholder screen, empty change set) —
//! callers of [`Session`](crate::Session) never see them.

use thiserror::Error;

/// Failure while talking to the origin service.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped.
    #[error("request to {route} failed: {reason}")]
    Request { route: String, reason: String },
    /// The service answered outside the 2xx range.
    #[error("{route} answered with status {status}")]
    Status { route: String, status: u16 },
    /// The response body did not match the expected wire shape.
    #[error("invalid response from {route}: {reason}")]
    Decode { route: String, reason: String },
}

impl TransportError {
    /// Convenience constructor for request failures.
    pub fn request(route: impl Into<String>, reason: impl ToString) -> Self {
        Self::Request {
            route: route.into(),
            reason: reason.to_string(),
        }
    }

    /// Convenience constructor for malformed responses.
    pub fn decode(route: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            route: route.into(),
            reason: reason.to_string(),
        }
    }
}
