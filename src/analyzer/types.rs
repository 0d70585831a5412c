use indexmap::IndexMap;

/// The closed set of rule breaches the analyzer can report.
///
/// Every consumer switches exhaustively over this; adding a variant is a
/// breaking change for all formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    LineTooLong,
    ImproperIndentation,
    RepeatedLiteral,
    BlankLineRun,
    NamingConvention,
}

impl ViolationKind {
    /// All kinds, most severe first. The order is the display-merge rank.
    pub const ALL: [Self; 5] = [
        Self::LineTooLong,
        Self::ImproperIndentation,
        Self::RepeatedLiteral,
        Self::BlankLineRun,
        Self::NamingConvention,
    ];

    /// Fixed human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LineTooLong => "Line exceeds 120 characters",
            Self::ImproperIndentation => "Improper indentation",
            Self::RepeatedLiteral => "Repeated string literal (consider using a constant)",
            Self::BlankLineRun => "Consecutive blank lines",
            Self::NamingConvention => "Naming convention violation (should be camelCase)",
        }
    }

    /// Short label for per-line report rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LineTooLong => "line too long",
            Self::ImproperIndentation => "indentation",
            Self::RepeatedLiteral => "repeated literal",
            Self::BlankLineRun => "blank lines",
            Self::NamingConvention => "naming",
        }
    }

    /// Fixed severity rank, used only for display merging. Higher is more
    /// severe; the scan itself never consults this.
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        match self {
            Self::LineTooLong => 5,
            Self::ImproperIndentation => 4,
            Self::RepeatedLiteral => 3,
            Self::BlankLineRun => 2,
            Self::NamingConvention => 1,
        }
    }

    /// Stable machine-readable name for serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineTooLong => "line_too_long",
            Self::ImproperIndentation => "improper_indentation",
            Self::RepeatedLiteral => "repeated_literal",
            Self::BlankLineRun => "blank_line_run",
            Self::NamingConvention => "naming_convention",
        }
    }
}

/// A single detected rule breach tied to one source line.
///
/// Immutable once created; the line number is 1-based and always within the
/// analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: ViolationKind,
    line_number: usize,
    line_text: String,
}

impl Violation {
    #[must_use]
    pub fn new(kind: ViolationKind, line_number: usize, line_text: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            line_text: line_text.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// 1-based line number within the analyzed text.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// The raw source line at detection time.
    #[must_use]
    pub fn line_text(&self) -> &str {
        &self.line_text
    }
}

/// Aggregated outcome of one analysis run.
///
/// Violations keep generation order: per-line findings in line order, then
/// all repeated-literal findings in literal-discovery order. The sequence is
/// not globally sorted by line number. Built once per run and never mutated;
/// re-analysis produces a fresh result.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    violations: Vec<Violation>,
    counts: IndexMap<ViolationKind, usize>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        let mut counts = IndexMap::new();
        for violation in &violations {
            *counts.entry(violation.kind()).or_insert(0) += 1;
        }
        Self { violations, counts }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Counts per kind, keyed in first-occurrence order, derived by folding
    /// the violations at construction time.
    #[must_use]
    pub const fn counts_by_kind(&self) -> &IndexMap<ViolationKind, usize> {
        &self.counts
    }

    #[must_use]
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.kind() == kind)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
