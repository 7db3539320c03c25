// keywrap-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for a one-shot rewrite of a string without building
//! and holding an engine.

use anyhow::Result;
use crate::config::RewriteConfig;
use crate::errors::KeywrapError;
use crate::engine::RewriteEngine;
use crate::engines::fixed_point::FixedPointEngine;

/// Rewrites `content` with `config` and returns the fixed-point output.
///
/// Fails with `KeywrapError::PassLimitExceeded` when the rules keep changing
/// the text past `FixedPointEngine::pass_limit`.
pub fn headless_rewrite_string(config: RewriteConfig, content: &str) -> Result<String> {
    let engine = FixedPointEngine::new(config)?;
    let report = engine.rewrite_with_report(content);
    if !report.converged {
        return Err(KeywrapError::PassLimitExceeded(report.passes).into());
    }
    Ok(report.output)
}
