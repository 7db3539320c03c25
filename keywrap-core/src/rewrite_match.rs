//! Data structures describing what a rewrite run changed.

use log::debug;
use serde::{Deserialize, Serialize};

/// A single rewritten span.
///
/// `start` and `end` are byte offsets into the text the pass was applied to,
/// not into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RewriteMatch {
    pub rule_name: String,
    pub original_string: String,
    pub rewritten_string: String,
    pub start: u64,
    pub end: u64,
    /// 1-based number of the pass that produced this rewrite.
    pub pass: usize,
}

/// Outcome of running an engine to its fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteReport {
    /// The transformed text.
    pub output: String,
    /// Number of passes that changed the text. The final, unchanged
    /// confirmation pass is not counted.
    pub passes: usize,
    /// Total number of spans rewritten across all passes.
    pub replacements: usize,
    /// Replacements made in each changing pass, in order.
    pub per_pass: Vec<usize>,
    pub matches: Vec<RewriteMatch>,
    /// False when the pass limit stopped the run before a pass came back
    /// unchanged.
    pub converged: bool,
}

impl RewriteReport {
    /// True when the output differs from the input.
    pub fn changed(&self) -> bool {
        self.passes > 0
    }

    /// Emits one debug record per rewritten span.
    pub fn log_matches(&self) {
        for m in &self.matches {
            debug!(
                "[pass {}] rule '{}' at {}..{}: {} -> {}",
                m.pass, m.rule_name, m.start, m.end, m.original_string, m.rewritten_string
            );
        }
    }
}
