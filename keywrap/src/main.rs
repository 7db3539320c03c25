// keywrap/src/main.rs
//! keywrap entry point.
//!
//! Loads the embedded rule, patches the fixed target file and prints two
//! status lines. Errors propagate out of `main` and end the process with a
//! non-zero status.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::info;
use std::io;
use std::path::Path;

use keywrap::cli::Cli;
use keywrap::logger;
use keywrap::ui::output_format;
use keywrap::{run_patch, TARGET_FILE};
use keywrap_core::FixedPointEngine;

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let engine = FixedPointEngine::with_default_rules().context("Failed to load rewrite rules")?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut out = stdout.lock();

    output_format::print_status_message(&mut out, &format!("Patching {}", TARGET_FILE), supports_color)?;

    let outcome = run_patch(&engine, Path::new(TARGET_FILE))?;
    info!(
        "{}: {} replacement(s) in {} pass(es), changed: {}",
        outcome.path.display(),
        outcome.replacements,
        outcome.passes,
        outcome.changed
    );

    output_format::print_success_message(&mut out, "Done.", supports_color)?;
    Ok(())
}
