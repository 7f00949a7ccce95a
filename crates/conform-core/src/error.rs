//! # Error Types: Core Construction Failures
//!
//! Errors raised while *building* values, never while validating them.
//! A value that does not match a schema is not an error at this layer;
//! mismatches are plain data produced by the matchers in `conform-schema`.

use thiserror::Error;

/// Error constructing a core value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A regular expression source could not be compiled.
    #[error("invalid pattern /{pattern}/{flags}: {reason}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// The flags the pattern was declared with.
        flags: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A regular expression flag is not recognised.
    #[error("unsupported pattern flag '{0}'")]
    UnsupportedFlag(char),

    /// A regular expression flag was given more than once.
    #[error("duplicate pattern flag '{0}'")]
    DuplicateFlag(char),

    /// A millisecond timestamp is outside the representable date range.
    #[error("invalid date: {0} ms since epoch is out of range")]
    InvalidDate(i64),

    /// A date string could not be parsed as RFC 3339.
    #[error("invalid date string {input:?}: {reason}")]
    InvalidDateString {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
