//! # Check Subcommand
//!
//! `conform check --schema <file> --document <file>`: the schema document is
//! read with literal semantics (objects are shapes, arrays are tuples,
//! scalars are literals) and the data document is validated against it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use conform_core::Value;
use conform_schema::validate;
use tracing::info;

use crate::document;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document to validate (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    pub document: PathBuf,

    /// Print nothing; report through the exit status only.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Result of checking one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The document conforms.
    Conforms,
    /// The document does not conform; carries the mismatch message.
    Mismatch(String),
}

impl Verdict {
    /// True if the document conforms.
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Conforms)
    }
}

/// Load both files and validate the document.
///
/// # Errors
///
/// Fails if either file cannot be read or parsed, or if the schema document
/// cannot be compiled.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<Verdict> {
    let schema = Value::from(document::load(&args.schema)?);
    let value = Value::from(document::load(&args.document)?);

    let outcome = validate(schema, &value)
        .with_context(|| format!("invalid schema in {}", args.schema.display()))?;

    let verdict = match outcome {
        Ok(()) => Verdict::Conforms,
        Err(mismatch) => Verdict::Mismatch(mismatch.into_message()),
    };
    info!(
        schema = %args.schema.display(),
        document = %args.document.display(),
        conforms = verdict.is_ok(),
        "checked document"
    );
    Ok(verdict)
}
