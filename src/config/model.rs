use serde::{Deserialize, Serialize};

use crate::analyzer::RuleSettings;
use crate::rules;

/// Tool configuration. The serde defaults reproduce the stock rule set, so
/// an absent config file behaves identically to no configuration at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// Maximum characters per line.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Largest allowed indentation deepening between consecutive lines.
    #[serde(default = "default_max_indent_jump")]
    pub max_indent_jump: usize,

    /// Literal bodies at or below this length are never counted as repeated.
    #[serde(default = "default_min_literal_length")]
    pub min_literal_length: usize,

    /// File extensions to accept.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories to scan when no explicit paths are given.
    #[serde(default)]
    pub include_paths: Vec<String>,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            max_indent_jump: default_max_indent_jump(),
            min_literal_length: default_min_literal_length(),
            extensions: default_extensions(),
            include_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    /// Glob patterns pruned during directory scanning.
    #[serde(default)]
    pub patterns: Vec<String>,
}

const fn default_max_line_length() -> usize {
    rules::MAX_LINE_LENGTH
}

const fn default_max_indent_jump() -> usize {
    rules::MAX_INDENT_JUMP
}

const fn default_min_literal_length() -> usize {
    rules::MIN_LITERAL_LENGTH
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

impl Config {
    /// Rule thresholds for the analyzer, as configured.
    #[must_use]
    pub fn rule_settings(&self) -> RuleSettings {
        RuleSettings {
            max_line_length: self.default.max_line_length,
            max_indent_jump: self.default.max_indent_jump,
            min_literal_length: self.default.min_literal_length,
            extensions: self.default.extensions.clone(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
