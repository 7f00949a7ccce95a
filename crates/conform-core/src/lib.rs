//! # conform-core: Foundational Types for conform
//!
//! This crate defines the runtime value model that the validation engine in
//! `conform-schema` operates on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One closed value enum.** [`Value`] covers every runtime shape the
//!    engine understands: primitives, dates, regular expressions, arrays,
//!    objects, errors and functions. Exhaustive `match` everywhere.
//!
//! 2. **Identity is explicit.** Reference values share their payload through
//!    `Arc`; [`Value::strict_eq`] compares pointers for them and contents for
//!    primitives.
//!
//! 3. **Is-a without a prototype chain.** [`Class`] is an explicit registry
//!    entry with a single parent, used by instance and prototype checks.
//!
//! 4. **Classification and rendering live next to the data.** [`classify`]
//!    and [`render`] produce the tags and fragments used in every mismatch
//!    message, so all matchers speak the same vocabulary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `conform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod class;
pub mod error;
pub mod json;
pub mod pattern;
pub mod render;
pub mod tag;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use class::Class;
pub use error::CoreError;
pub use pattern::RegExp;
pub use render::{format_number, render};
pub use tag::{classify, ValueTag};
pub use temporal::Date;
pub use value::{Array, ErrorValue, Function, Object, Symbol, Value};
