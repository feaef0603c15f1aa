//! `algebra-laws`: verifies every structure in the algebra catalog.
//!
//! Runs the catalog suite: each named instance against every law its kind
//! declares, plus pointwise lifts, widened views and exhaustive checks of
//! the finite carriers.
//!
//! **Usage:**
//! ```text
//! algebra-laws [--cases N] [--deterministic] [--fail-fast] [--filter SUBSTR] [--json]
//! ```
//!
//! Exits non-zero if any law fails. Set `RUST_LOG=debug` to trace each
//! checked law.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use algebra_catalog::Suite;
use algebra_verify::{Verifier, VerifyConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Verify the algebraic laws of the catalog instances.
#[derive(Parser)]
#[command(
    name = "algebra-laws",
    about = "Verify the algebraic laws of every catalog instance"
)]
struct Args {
    /// Random trials per (instance, law) pair (default: proptest's, or PROPTEST_CASES).
    #[arg(long)]
    cases: Option<u32>,

    /// Use a fixed RNG seed so runs are reproducible.
    #[arg(long)]
    deterministic: bool,

    /// Stop after the first failing law.
    #[arg(long)]
    fail_fast: bool,

    /// Only verify instances whose name contains this substring.
    #[arg(long)]
    filter: Option<String>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = VerifyConfig::default()
        .deterministic(args.deterministic)
        .fail_fast(args.fail_fast);
    if let Some(cases) = args.cases {
        config = config.with_cases(cases);
    }
    debug!(?config, "starting catalog suite");
    let verifier = Verifier::new(config).context("invalid verifier configuration")?;

    let mut suite = Suite::new();
    if let Some(filter) = args.filter {
        suite = suite.with_filter(filter);
    }
    let report = suite.run(&verifier).context("catalog suite could not run")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Algebra Law Report");
        println!("==================");
        println!();
        println!("{report}");
    }

    if !report.all_passed() {
        eprintln!("Verification FAILED: {} law(s) did not hold.", report.failure_count());
        process::exit(1);
    }
    if report.results.is_empty() {
        eprintln!("No instances matched.");
    }
    Ok(())
}
