//! # Error Types: Configuration Errors
//!
//! Two disjoint failure categories exist in this crate:
//!
//! - **Validation failures** are expected and data-dependent. They are
//!   [`Mismatch`](crate::Mismatch) values inside an [`Outcome`](crate::Outcome)
//!   and are never represented here.
//! - **Configuration errors** are malformed schemas: an unsupported schema
//!   value, a combinator given too few sub-schemas, or a pattern that does not
//!   compile. They are returned by the constructors, at construction time,
//!   before any value is validated.

use conform_core::{CoreError, ValueTag};
use thiserror::Error;

use crate::facade::AssertionError;

/// A schema could not be compiled into a rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema value has no declarative meaning (e.g. a bare function or
    /// regular expression used as a schema).
    #[error("unsupported schema shape: {tag}")]
    UnsupportedSchema {
        /// Tag of the rejected schema value.
        tag: ValueTag,
    },

    /// A combinator received fewer than two sub-schemas.
    #[error("{combinator} requires at least two arguments")]
    TooFewRules {
        /// Name of the combinator constructor.
        combinator: &'static str,
        /// Number of sub-schemas actually given.
        given: usize,
    },

    /// A value embedded in the schema could not be built.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Error returned by the assertion entry point.
#[derive(Error, Debug, Clone)]
pub enum MatchError {
    /// The schema itself is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The value does not conform to the schema.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
}
