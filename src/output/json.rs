use serde::Serialize;

use crate::analyzer::{AnalysisResult, ViolationKind};
use crate::error::Result;

use super::{FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    clean: usize,
    with_violations: usize,
    total_violations: usize,
    counts: KindCounts,
}

#[derive(Serialize, Default)]
struct KindCounts {
    line_too_long: usize,
    improper_indentation: usize,
    repeated_literal: usize,
    blank_line_run: usize,
    naming_convention: usize,
}

impl KindCounts {
    fn add(&mut self, result: &AnalysisResult) {
        self.line_too_long += result.count_of(ViolationKind::LineTooLong);
        self.improper_indentation += result.count_of(ViolationKind::ImproperIndentation);
        self.repeated_literal += result.count_of(ViolationKind::RepeatedLiteral);
        self.blank_line_run += result.count_of(ViolationKind::BlankLineRun);
        self.naming_convention += result.count_of(ViolationKind::NamingConvention);
    }
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    total: usize,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonViolation {
    kind: &'static str,
    line: usize,
    text: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut counts = KindCounts::default();
        let mut total_violations = 0;
        let mut clean = 0;
        for report in reports {
            counts.add(&report.result);
            total_violations += report.result.total();
            if report.result.is_clean() {
                clean += 1;
            }
        }

        let output = JsonOutput {
            summary: Summary {
                total_files: reports.len(),
                clean,
                with_violations: reports.len() - clean,
                total_violations,
                counts,
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> FileEntry {
    FileEntry {
        path: report.path.display().to_string(),
        total: report.result.total(),
        violations: report
            .result
            .violations()
            .iter()
            .map(|violation| JsonViolation {
                kind: violation.kind().as_str(),
                line: violation.line_number(),
                text: violation.line_text().to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
