use indexmap::IndexMap;
use regex::Regex;

/// Extracts double-quoted string bodies from source lines.
///
/// The pattern is `"([^"]*)"` with no escape handling: a literal containing
/// an escaped quote mis-splits.
pub struct LiteralExtractor {
    literal: Regex,
}

impl Default for LiteralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            literal: Regex::new("\"([^\"]*)\"").expect("Invalid regex"),
        }
    }

    /// Quoted-string bodies found on a single line, left to right.
    #[must_use]
    pub fn extract<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.literal
            .captures_iter(line)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Repeated literal bodies across a whole file.
    ///
    /// Bodies longer than `min_len` characters are grouped by exact text in
    /// first-seen order; each group maps to the ascending set of 1-based line
    /// numbers the body appears on (one entry per line, however often the
    /// body occurs within it). Only groups spanning two or more lines are
    /// kept.
    #[must_use]
    pub fn repeated_literals(&self, lines: &[&str], min_len: usize) -> IndexMap<String, Vec<usize>> {
        let mut occurrences: IndexMap<String, Vec<usize>> = IndexMap::new();

        for (i, line) in lines.iter().enumerate() {
            let line_number = i + 1;
            for body in self.extract(line) {
                if body.chars().count() <= min_len {
                    continue;
                }
                let entry = occurrences.entry(body.to_string()).or_default();
                if entry.last() != Some(&line_number) {
                    entry.push(line_number);
                }
            }
        }

        occurrences.retain(|_, line_numbers| line_numbers.len() >= 2);
        occurrences
    }
}

/// Suggest a constant name for a string literal body.
///
/// The text is uppercased, every run of non-alphanumeric characters becomes a
/// single underscore, and leading/trailing underscores are stripped. A result
/// that does not start with a letter is prefixed with `STRING_`; an empty
/// input (or a result normalized down to nothing) yields `EMPTY_STRING`.
#[must_use]
pub fn suggest_constant_name(text: &str) -> String {
    let mut name = String::new();
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_uppercase());
            pending_separator = false;
        } else if !pending_separator {
            name.push('_');
            pending_separator = true;
        }
    }

    let name = name.trim_matches('_');
    if name.is_empty() {
        return "EMPTY_STRING".to_string();
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return format!("STRING_{name}");
    }
    name.to_string()
}

#[cfg(test)]
#[path = "literals_tests.rs"]
mod tests;
