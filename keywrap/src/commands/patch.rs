//! The patch command: read the target file, rewrite it, write it back.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use keywrap_core::RewriteEngine;

/// The file keywrap patches, relative to the working directory.
pub const TARGET_FILE: &str = "license/server/WebAPI.cpp";

/// What a patch run did, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub replacements: usize,
    pub passes: usize,
    pub changed: bool,
}

/// Reads `path`, rewrites its contents with `engine` and overwrites it.
///
/// The file is always rewritten, even when nothing changed. There is no
/// backup and no atomic replace. A rewrite that hits the pass limit leaves
/// the file untouched and returns an error.
pub fn run_patch(engine: &dyn RewriteEngine, path: &Path) -> Result<PatchOutcome> {
    info!("Reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = engine.rewrite_with_report(&source);
    report.log_matches();
    debug!(
        "Rewrite finished: {} replacement(s) over {} pass(es). Original length: {}, new length: {}",
        report.replacements,
        report.passes,
        source.len(),
        report.output.len()
    );

    if !report.converged {
        bail!(
            "Rewrite of {} did not reach a fixed point after {} pass(es); file left unchanged",
            path.display(),
            report.passes
        );
    }

    fs::write(path, &report.output)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());

    Ok(PatchOutcome {
        path: path.to_path_buf(),
        replacements: report.replacements,
        passes: report.passes,
        changed: report.changed(),
    })
}
