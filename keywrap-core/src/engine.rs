// keywrap-core/src/engine.rs
//! Defines the `RewriteEngine` trait.
//!
//! The trait decouples the CLI from the concrete rewriting strategy. Engines
//! are pure: they take text and return text, with no I/O.
//!
//! License: MIT OR APACHE 2.0

use crate::config::RewriteConfig;
use crate::rewrite_match::RewriteReport;
use crate::rules::compiler::CompiledRules;

/// Core functionality of a rewrite engine.
pub trait RewriteEngine: Send + Sync {
    /// Rewrites `content` and returns the transformed text.
    ///
    /// Total on any input: text with no matches comes back unchanged.
    fn rewrite(&self, content: &str) -> String {
        self.rewrite_with_report(content).output
    }

    /// Rewrites `content` and reports how many passes and replacements it took.
    fn rewrite_with_report(&self, content: &str) -> RewriteReport;

    /// Returns the compiled rules used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the rule set the engine was built from.
    fn get_rules(&self) -> &RewriteConfig;
}
