//! Source-file discovery for the CLI driver.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, StyleGuardError};

/// Filter applied while walking directories: extension allow-list plus
/// exclude globs.
///
/// Explicit file arguments bypass this filter; the analyzer's own extension
/// check covers them and rejects mismatches as errors.
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl SourceFilter {
    /// Build a filter from extensions (matched case-insensitively) and
    /// exclude glob patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|source| StyleGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source,
            })?;

        Ok(Self {
            extensions,
            exclude,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext));

        has_extension && !self.exclude.is_match(path)
    }
}

/// Collect the files to analyze from a mix of file and directory arguments.
///
/// Directories are walked recursively through the filter in filename order;
/// file arguments pass through untouched.
#[must_use]
pub fn collect_source_files(paths: &[PathBuf], filter: &SourceFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, filter));
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn scan_directory(root: &Path, filter: &SourceFilter) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file() && filter.matches(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
