#![forbid(unsafe_code)]

//! Input validators for text-input components.
//!
//! A validator is decoded once at tree-construction time and consulted on
//! every input change. Failure is never an error: an unknown validator
//! kind or a malformed pattern produces a validator that accepts nothing,
//! which reads as "input invalid" downstream.

use regex::Regex;
use sdui_schema::Validator;
use tracing::debug;

/// Compiled validator attached to a text input.
#[derive(Debug, Clone)]
pub struct InputValidator {
    pattern: Option<Regex>,
}

impl InputValidator {
    /// Decode a wire validator. Only `"REGEX"` is understood; anything
    /// else (or an unparsable pattern) yields a validator that never
    /// accepts.
    #[must_use]
    pub fn decode(raw: &Validator) -> Self {
        let pattern = match raw.kind.as_str() {
            "REGEX" => match Regex::new(&raw.value) {
                Ok(re) => Some(re),
                Err(err) => {
                    debug!(pattern = %raw.value, %err, "malformed validator pattern");
                    None
                }
            },
            other => {
                debug!(kind = other, "unknown validator kind");
                None
            }
        };
        Self { pattern }
    }

    /// Whether `input` satisfies the validator. Matches anywhere in the
    /// input (substring semantics, as the service expects).
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(input))
    }
}
