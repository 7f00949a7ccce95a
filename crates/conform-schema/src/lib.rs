//! # conform-schema: Runtime Structural Validation
//!
//! Declarative schemas for the dynamic values of `conform-core`, compiled
//! into reusable validating functions ([`Rule`]) that report the first point
//! of non-conformance with a path-qualified message.
//!
//! ## Layers
//!
//! - **Protocol**: [`Outcome`] / [`Mismatch`] and path prefixing.
//! - **Schemas**: [`Schema`], [`Shape`] and the [`shape!`] / [`schemas!`]
//!   builders.
//! - **Normalizer**: [`normalize`] turns any schema into a [`Rule`].
//! - **Matchers**: literal, primitive-kind, pattern, predicate, structural
//!   and reference-type rules.
//! - **Combinators**: `all_of`, `one_of`, `any_of`, `none_of`, `not` and the
//!   nullability wrappers.
//! - **Facade**: [`validate`], [`match_value`] and [`MismatchContext`].
//!
//! ## Errors
//!
//! A value that does not conform is *data* (`Err(Mismatch)` inside an
//! `Outcome`). A schema that cannot be compiled is a [`SchemaError`],
//! returned when the rule is built.
//!
//! ## Logging
//!
//! Only `tracing` events are emitted: `trace!` for each normalization step and
//! `debug!` when the facade observes a mismatch. Installing a subscriber is
//! left to the binary.

pub mod combinators;
pub mod error;
pub mod facade;
pub mod kinds;
pub mod literal;
pub mod normalize;
pub mod outcome;
pub mod reference;
pub mod rule;
pub mod schema;
pub mod structural;

pub use combinators::{all_of, any_of, none_of, not, nullable, nullish, one_of, optional};
pub use error::{MatchError, SchemaError};
pub use facade::{match_value, validate, AssertionError, Match, MismatchContext};
pub use kinds::{
    a_bigint, a_boolean, a_date, a_null, a_nullish, a_number, a_regexp, a_string, an_undefined,
    anything, predicate, predicate_with, re, re_str, OnPanic, PredicateOptions,
};
pub use literal::{exact, literal, literal_eq};
pub use normalize::normalize;
pub use outcome::{Mismatch, Outcome};
pub use reference::{error_with, instance_of, instance_of_with, is_prototyped_by, strict_equal};
pub use rule::Rule;
pub use schema::{Schema, Shape};
pub use structural::{array_of, length, object_like, object_shape, tuple};
