mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use crate::analyzer::AnalysisResult;
use crate::error::Result;

/// One analyzed file paired with its result, ready for rendering.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: AnalysisResult,
}

/// Trait for formatting analysis reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
