// keywrap-core/src/lib.rs
//! # keywrap Core Library
//!
//! `keywrap-core` holds the pure rewrite logic behind the `keywrap` tool: it
//! turns JsonCpp accessors with a string-literal key, such as `obj["key"]`,
//! into `obj[std::string("key")]` so the index operator resolves to the
//! `const std::string&` overload. The library does no I/O on the rewrite path.
//!
//! ## Modules
//!
//! * `config`: `RewriteRule` and `RewriteConfig`, loaded from the rule file embedded at build time.
//! * `rules`: Compiles rules into regexes and caches the result.
//! * `engine`: The `RewriteEngine` trait.
//! * `engines`: Concrete engines; `FixedPointEngine` repeats global substitution until nothing changes.
//! * `rewrite_match`: `RewriteMatch` and `RewriteReport` for logging what a run did.
//! * `headless`: One-shot convenience wrapper.
//! * `errors`: The `KeywrapError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use keywrap_core::{FixedPointEngine, RewriteEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let engine = FixedPointEngine::with_default_rules()?;
//!
//!     let patched = engine.rewrite(r#"response["statistics"]["servers"] = count;"#);
//!     assert_eq!(
//!         patched,
//!         r#"response[std::string("statistics")][std::string("servers")] = count;"#
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Rewriting itself cannot fail. Loading and compiling rules return
//! `anyhow::Result`, with `KeywrapError` describing rule-level failures.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rewrite_match;
pub mod rules;

/// Re-exports the rule configuration types.
pub use config::{RewriteConfig, RewriteRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type.
pub use errors::KeywrapError;

/// Re-exports the engine trait and its implementation.
pub use engine::RewriteEngine;
pub use engines::fixed_point::FixedPointEngine;

/// Re-exports the reporting types.
pub use rewrite_match::{RewriteMatch, RewriteReport};

/// Re-exports the one-shot helper.
pub use headless::headless_rewrite_string;

pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
