//! A `RewriteEngine` that applies every rule as a global substitution and
//! repeats the pass until the text stops changing.
//!
//! A single leftmost, non-overlapping pass cannot rewrite a chained access
//! such as `a["x"]["y"]`: the match for `a["x"]` consumes the `]` that
//! `["y"]` needs as its prefix. The next pass sees that bare `]` and
//! rewrites the second access. Alternate links of a chain are picked up in
//! the first pass and the rest in the second. Each replacement removes one
//! `["` and adds none, so the loop always terminates for the embedded rule.
//! Custom rules carry no such guarantee; a run stops after
//! `pass_limit` changing passes and reports that it did not converge.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, trace, warn};
use std::sync::Arc;

use crate::config::{validate_rules, RewriteConfig};
use crate::engine::RewriteEngine;
use crate::rewrite_match::{RewriteMatch, RewriteReport};
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};

const PASS_HEADROOM: usize = 8;

#[derive(Debug)]
pub struct FixedPointEngine {
    compiled_rules: Arc<CompiledRules>,
    config: RewriteConfig,
}

impl FixedPointEngine {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        validate_rules(&config.rules).context("Invalid rewrite rules for FixedPointEngine")?;
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile rewrite rules for FixedPointEngine")?;

        Ok(Self {
            compiled_rules,
            config,
        })
    }

    /// Builds an engine from the embedded default rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(RewriteConfig::load_default_rules()?)
    }

    /// Most changing passes a run may take on `content` before it is cut off.
    ///
    /// One per `["` digraph covers the embedded rule; the headroom leaves
    /// room for custom rules that settle in a few passes on other text.
    pub fn pass_limit(content: &str) -> usize {
        content.matches("[\"").count() + PASS_HEADROOM
    }

    /// One full pass: every rule, in order, as a global substitution.
    fn apply_pass(&self, input: &str, pass: usize, matches: &mut Vec<RewriteMatch>) -> String {
        let mut current = input.to_string();

        for rule in &self.compiled_rules.rules {
            let mut rewritten = String::with_capacity(current.len());
            let mut last_end = 0usize;
            let mut hits = 0usize;

            for caps in rule.regex.captures_iter(&current) {
                let Some(whole) = caps.get(0) else { continue };
                let mut replacement = String::new();
                caps.expand(&rule.replace_with, &mut replacement);

                rewritten.push_str(&current[last_end..whole.start()]);
                rewritten.push_str(&replacement);
                last_end = whole.end();
                hits += 1;

                matches.push(RewriteMatch {
                    rule_name: rule.name.clone(),
                    original_string: whole.as_str().to_string(),
                    rewritten_string: replacement,
                    start: whole.start() as u64,
                    end: whole.end() as u64,
                    pass,
                });
            }

            if hits == 0 {
                continue;
            }
            rewritten.push_str(&current[last_end..]);
            trace!("Rule '{}' rewrote {} span(s) in pass {}.", rule.name, hits, pass);
            current = rewritten;
        }

        current
    }
}

impl RewriteEngine for FixedPointEngine {
    fn rewrite_with_report(&self, content: &str) -> RewriteReport {
        let mut report = RewriteReport::default();
        let mut current = content.to_string();
        let pass_limit = Self::pass_limit(content);

        loop {
            let pass = report.passes + 1;
            let mut pass_matches = Vec::new();
            let next = self.apply_pass(&current, pass, &mut pass_matches);

            if next == current {
                debug!("Pass {} made no changes; fixed point reached.", pass);
                report.converged = true;
                break;
            }
            if pass > pass_limit {
                warn!(
                    "Pass {} still changed the text; giving up after {} pass(es) without a fixed point.",
                    pass, pass_limit
                );
                break;
            }

            debug!("Pass {}: {} replacement(s).", pass, pass_matches.len());
            report.passes = pass;
            report.replacements += pass_matches.len();
            report.per_pass.push(pass_matches.len());
            report.matches.append(&mut pass_matches);
            current = next;
        }

        report.output = current;
        report
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &RewriteConfig {
        &self.config
    }
}
