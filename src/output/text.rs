use std::collections::BTreeMap;
use std::fmt::Write;

use indexmap::IndexMap;

use crate::analyzer::severity;
use crate::analyzer::{AnalysisResult, Violation, ViolationKind};
use crate::error::Result;
use crate::rules::{self, LiteralExtractor, suggest_constant_name};

use super::{FileReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    /// Highlight color per kind, mirroring the classic scheme: red for long
    /// lines, orange (yellow on ANSI) for indentation, blue for repeated
    /// literals, purple (magenta) for blank runs, green for naming.
    const fn kind_color(kind: ViolationKind) -> &'static str {
        match kind {
            ViolationKind::LineTooLong => ansi::RED,
            ViolationKind::ImproperIndentation => ansi::YELLOW,
            ViolationKind::RepeatedLiteral => ansi::BLUE,
            ViolationKind::BlankLineRun => ansi::MAGENTA,
            ViolationKind::NamingConvention => ansi::GREEN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &FileReport, output: &mut String) {
        writeln!(
            output,
            "{}: {} violation(s)",
            report.path.display(),
            report.result.total()
        )
        .ok();

        for (line_number, violations) in group_by_line(&report.result) {
            self.format_line_row(line_number, &violations, output);
        }

        for kind in ViolationKind::ALL {
            let count = report.result.count_of(kind);
            if count > 0 {
                writeln!(output, "   {}: {count}", kind.description()).ok();
            }
        }

        if self.verbose >= 1 {
            Self::format_suggestions(&report.result, output);
        }
    }

    /// One merged row per line: all labels on the line in rank order, the
    /// row colored by the most severe kind present.
    fn format_line_row(&self, line_number: usize, violations: &[&Violation], output: &mut String) {
        let kinds_present: Vec<ViolationKind> = ViolationKind::ALL
            .into_iter()
            .filter(|kind| violations.iter().any(|v| v.kind() == *kind))
            .collect();

        let labels = kinds_present
            .iter()
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join(", ");

        let color = severity::most_severe(kinds_present).map_or(ansi::RESET, Self::kind_color);

        let text = violations
            .first()
            .map_or("", |violation| violation.line_text());
        let row = format!("{line_number:3}: [{labels}] {text}");
        writeln!(output, "  {}", self.colorize(&row, color)).ok();
    }

    fn format_suggestions(result: &AnalysisResult, output: &mut String) {
        let extractor = LiteralExtractor::new();
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for violation in result.of_kind(ViolationKind::RepeatedLiteral) {
            for body in extractor.extract(violation.line_text()) {
                if body.chars().count() > rules::MIN_LITERAL_LENGTH {
                    *counts.entry(body.to_string()).or_insert(0) += 1;
                }
            }
        }
        counts.retain(|_, occurrences| *occurrences >= 2);

        if counts.is_empty() {
            return;
        }

        writeln!(output, "   Constant suggestions:").ok();
        for body in counts.keys() {
            writeln!(output, "     \"{body}\" -> {}", suggest_constant_name(body)).ok();
        }
    }

    fn format_summary(&self, total: usize, clean: usize, flagged: usize, violations: usize) -> String {
        let clean_str = self.colorize(&clean.to_string(), ansi::GREEN);
        let flagged_str = self.colorize(&flagged.to_string(), ansi::RED);

        format!(
            "Summary: {total} files analyzed, {clean_str} clean, {flagged_str} with violations ({violations} total)"
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        let (flagged, clean): (Vec<_>, Vec<_>) =
            reports.iter().partition(|report| !report.result.is_clean());

        for report in &flagged {
            self.format_report(report, &mut output);
            writeln!(output).ok();
        }

        // Show clean files only in verbose mode
        if self.verbose >= 1 {
            for report in &clean {
                writeln!(output, "{}: clean", report.path.display()).ok();
            }
            if !clean.is_empty() {
                writeln!(output).ok();
            }
        }

        let total_violations: usize = reports.iter().map(|report| report.result.total()).sum();
        let summary =
            self.format_summary(reports.len(), clean.len(), flagged.len(), total_violations);
        writeln!(output, "{summary}").ok();

        Ok(output)
    }
}

/// Violations grouped by 1-based line number, ascending. Grouping lives on
/// the rendering side; the stored result keeps generation order.
fn group_by_line(result: &AnalysisResult) -> BTreeMap<usize, Vec<&Violation>> {
    let mut by_line: BTreeMap<usize, Vec<&Violation>> = BTreeMap::new();
    for violation in result.violations() {
        by_line.entry(violation.line_number()).or_default().push(violation);
    }
    by_line
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
