//! compiler.rs - Compiles and caches rewrite rules.
//!
//! Converts a `RewriteConfig` into `CompiledRules` ready for the engine. The
//! result is kept in a process-wide cache keyed by a hash of the rule set so
//! repeated engine construction does not recompile the same patterns.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{RewriteConfig, RewriteRule, MAX_PATTERN_LENGTH};
use crate::errors::KeywrapError;

/// A single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Replacement template, expanded against each match's captures.
    pub replace_with: String,
    /// The unique name of the rewrite rule.
    pub name: String,
}

/// All compiled rules, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// Global cache for compiled rules, keyed by `hash_config`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the rule set to create the cache key.
///
/// Rules are applied in declaration order within a pass, so the order is
/// part of the key.
fn hash_config(config: &RewriteConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `RewriteRule`s into `CompiledRules`.
///
/// Rules without a pattern are skipped. Every compilation failure is
/// collected and reported together.
pub fn compile_rules(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, KeywrapError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let Some(pattern) = rule.pattern.as_ref() else {
            warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
            continue;
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(KeywrapError::PatternLengthExceeded(
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(pattern)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "keywrap_core::compiler",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                });
            }
            Err(e) => {
                compilation_errors.push(KeywrapError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(KeywrapError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Returns compiled rules for `config`, compiling them on a cache miss.
pub fn get_or_compile_rules(config: &RewriteConfig) -> Result<Arc<CompiledRules>, KeywrapError> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE
            .read()
            .map_err(|_| KeywrapError::Fatal("compiled rules cache lock poisoned".to_string()))?;
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = Arc::new(compile_rules(config.active_rules().cloned().collect())?);

    COMPILED_RULES_CACHE
        .write()
        .map_err(|_| KeywrapError::Fatal("compiled rules cache lock poisoned".to_string()))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached rules for key: {}", cache_key);
    Ok(compiled)
}
