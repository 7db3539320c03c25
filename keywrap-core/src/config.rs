//! Configuration management for `keywrap-core`.
//!
//! This module defines the data structures for rewrite rules. The rule set is
//! embedded into the binary at compile time from `config/default_rules.yaml`;
//! it is parsed and validated on load but never read from user files.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::KeywrapError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single rewrite rule applied by the fixed-point engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "jsoncpp_string_key").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// Replacement template. `${1}`, `${2}`, ... refer to capture groups.
    pub replace_with: String,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl RewriteRule {
    /// A rule is active unless it is explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Top-level rule set for keywrap.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RewriteConfig {
    /// Rules applied, in order, during every pass.
    pub rules: Vec<RewriteRule>,
}

impl RewriteConfig {
    /// Loads the built-in rewrite rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config = Self::from_yaml_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Parses and validates a rule set from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: RewriteConfig = serde_yml::from_str(yaml).context("Invalid rule YAML")?;
        validate_rules(&config.rules)?;
        Ok(config)
    }

    /// Returns the rules that take part in a rewrite pass.
    pub fn active_rules(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter().filter(|rule| rule.is_enabled())
    }
}

/// Validates rule integrity (regex compilation, capture group references).
pub(crate) fn validate_rules(rules: &[RewriteRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();
    let capture_ref_regex = Regex::new(r"\$\{?(\d+)\}?").context("capture reference regex")?;

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) if !p.is_empty() => p,
            _ => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        let regex = match Regex::new(pattern) {
            Ok(r) => r,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        // captures_len() counts the implicit whole-match group 0.
        let group_count = regex.captures_len() - 1;
        for cap in capture_ref_regex.captures_iter(&rule.replace_with) {
            if let Some(group_num) = cap.get(1).and_then(|g| g.as_str().parse::<usize>().ok()) {
                if group_num > group_count {
                    errors.push(format!(
                        "Rule '{}': replacement references non-existent capture group '${}'.",
                        rule.name, group_num
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(KeywrapError::InvalidRule(format!("Rule validation failed:\n{}", errors.join("\n"))).into())
    }
}
