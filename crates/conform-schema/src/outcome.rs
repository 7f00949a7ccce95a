//! # Result & Path Protocol
//!
//! Every matcher returns an [`Outcome`]: `Ok(())` when the value conforms,
//! `Err(Mismatch)` otherwise. A mismatch is plain data, never a panic, and
//! its message is self-contained: it can be shown to a user without any
//! further context.
//!
//! Composite matchers locate a failure by prefixing path segments with
//! [`Mismatch::at`]. Segments render as `[key]` and are joined outer-to-inner
//! with a single space, so a failure two levels down reads
//! `[a] [b] expected Number 1, got undefined`.

use std::fmt;

use thiserror::Error;

/// Result of applying a rule to a value.
pub type Outcome = Result<(), Mismatch>;

/// A validation failure with a path-qualified message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Mismatch {
    message: String,
}

/// Message used when a rule reports a mismatch with no text.
const UNDESCRIBED: &str = "value did not conform";

impl Mismatch {
    /// Create a mismatch with a top-level message. An empty message is
    /// replaced by `"value did not conform"`, so a mismatch always says
    /// something.
    pub fn new(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message.push_str(UNDESCRIBED);
        }
        Self { message }
    }

    /// Prefix the message with the path segment `[segment]`.
    pub fn at(self, segment: impl fmt::Display) -> Self {
        Self {
            message: format!("[{segment}] {}", self.message),
        }
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the mismatch, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Shorthand for a failed outcome.
pub(crate) fn invalid(message: impl Into<String>) -> Outcome {
    Err(Mismatch::new(message))
}
