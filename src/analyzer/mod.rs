mod propagate;
pub mod severity;
mod types;

pub use propagate::propagate_block;
pub use types::{AnalysisResult, Violation, ViolationKind};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, StyleGuardError};
use crate::rules::{self, LiteralExtractor, NamingHeuristic};

/// Thresholds driving the rule checks. `Default` is the stock rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSettings {
    /// Raw character count above which a line is flagged.
    pub max_line_length: usize,
    /// Largest allowed indentation deepening between consecutive non-blank
    /// lines.
    pub max_indent_jump: usize,
    /// Literal bodies at or below this length are never counted as repeated.
    pub min_literal_length: usize,
    /// File extensions accepted in file mode (lowercase, without the dot).
    pub extensions: Vec<String>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            max_line_length: rules::MAX_LINE_LENGTH,
            max_indent_jump: rules::MAX_INDENT_JUMP,
            min_literal_length: rules::MIN_LITERAL_LENGTH,
            extensions: vec!["java".to_string()],
        }
    }
}

/// Line-by-line scan orchestrator.
///
/// Drives a single pass over the input plus a whole-file literal pass,
/// assembles violations in generation order, and returns a fresh
/// [`AnalysisResult`] per call. The input is never mutated and no state
/// carries over between calls; concurrent invocations on independent inputs
/// are safe.
pub struct Analyzer {
    settings: RuleSettings,
    naming: NamingHeuristic,
    literals: LiteralExtractor,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(RuleSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: RuleSettings) -> Self {
        Self {
            settings,
            naming: NamingHeuristic::new(),
            literals: LiteralExtractor::new(),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// Analyze a source file on disk.
    ///
    /// # Errors
    /// Returns [`StyleGuardError::InvalidFileType`] when the filename
    /// extension is not in the accepted set, and
    /// [`StyleGuardError::FileRead`] when the file cannot be read. Both
    /// propagate unchanged; there is no retry and no partial result.
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisResult> {
        if !self.has_accepted_extension(path) {
            return Err(StyleGuardError::InvalidFileType {
                path: path.to_path_buf(),
                expected: self.settings.extensions.join(", "),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.analyze_source(&content))
    }

    /// Analyze in-memory source text, split on `\r?\n`.
    ///
    /// No extension check applies in this mode. Any text produces a
    /// best-effort result; empty input yields an empty result with all
    /// counts zero.
    #[must_use]
    pub fn analyze_source(&self, source: &str) -> AnalysisResult {
        let lines: Vec<&str> = source.lines().collect();
        self.analyze_lines(&lines)
    }

    fn has_accepted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .is_some_and(|ext| self.settings.extensions.iter().any(|e| *e == ext))
    }

    fn analyze_lines(&self, lines: &[&str]) -> AnalysisResult {
        let mut violations = Vec::new();
        let mut indent_flagged: HashSet<usize> = HashSet::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if rules::line_too_long(line, self.settings.max_line_length) {
                violations.push(Violation::new(ViolationKind::LineTooLong, i + 1, line));
            }

            if rules::improper_indentation(lines, i, self.settings.max_indent_jump) {
                let block = propagate::propagate_block(lines, i);
                let next = block.end;
                for j in block {
                    if indent_flagged.insert(j) {
                        violations.push(Violation::new(
                            ViolationKind::ImproperIndentation,
                            j + 1,
                            lines[j],
                        ));
                    }
                }
                // Resume past the block; skipped lines get no further checks
                // on this pass.
                i = next;
                continue;
            }

            if rules::consecutive_blank(lines, i) {
                violations.push(Violation::new(ViolationKind::BlankLineRun, i + 1, line));
            }

            if self.naming.is_violation(line) {
                violations.push(Violation::new(ViolationKind::NamingConvention, i + 1, line));
            }

            i += 1;
        }

        for line_numbers in self
            .literals
            .repeated_literals(lines, self.settings.min_literal_length)
            .into_values()
        {
            for line_number in line_numbers {
                violations.push(Violation::new(
                    ViolationKind::RepeatedLiteral,
                    line_number,
                    lines[line_number - 1],
                ));
            }
        }

        AnalysisResult::new(violations)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
