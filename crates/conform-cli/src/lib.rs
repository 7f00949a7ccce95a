//! # conform-cli: Document Checking from the Command Line
//!
//! A thin wrapper over `conform-schema`: load a schema document and a data
//! document (JSON, or YAML by extension), interpret the schema with literal
//! semantics and report whether the data conforms.
//!
//! ## Subcommands
//!
//! - `check`: validate one document against one schema file
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here and return data.
//! - All validation is delegated to `conform_schema::validate`.

pub mod check;
pub mod document;
