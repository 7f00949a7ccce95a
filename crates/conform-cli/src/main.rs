//! # conform CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use conform_cli::check::{run_check, CheckArgs, Verdict};

/// conform: structural validation of JSON and YAML documents.
#[derive(Parser, Debug)]
#[command(name = "conform", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a document against a schema document.
    Check(CheckArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let verdict = run_check(&args)?;
            if !args.quiet {
                match &verdict {
                    Verdict::Conforms => println!("ok"),
                    Verdict::Mismatch(message) => println!("{message}"),
                }
            }
            Ok(match verdict {
                Verdict::Conforms => ExitCode::SUCCESS,
                Verdict::Mismatch(_) => ExitCode::FAILURE,
            })
        }
    }
}
