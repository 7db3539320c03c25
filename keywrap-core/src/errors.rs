//! errors.rs - Custom error types for the keywrap-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `keywrap-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KeywrapError {
    #[error("Failed to compile rewrite rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid rewrite rule: {0}")]
    InvalidRule(String),

    #[error("Rewrite did not reach a fixed point within {0} passes")]
    PassLimitExceeded(usize),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
