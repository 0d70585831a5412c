use regex::Regex;

/// Heuristic camelCase classifier for identifier-like tokens.
///
/// This is textual pattern matching, not lexical analysis: string and comment
/// content is not understood, so misfires are possible and accepted. The
/// heuristic reports a plain boolean with no confidence attached.
pub struct NamingHeuristic {
    camel_case: Regex,
}

impl Default for NamingHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingHeuristic {
    #[must_use]
    pub fn new() -> Self {
        Self {
            camel_case: Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("Invalid regex"),
        }
    }

    /// Whether `name` is a valid camelCase identifier after stripping any
    /// trailing `;`, `,` and whitespace.
    #[must_use]
    pub fn is_camel_case(&self, name: &str) -> bool {
        let name = name.trim_end_matches([';', ',', ' ', '\t']);
        self.camel_case.is_match(name)
    }

    /// Whether a line breaches the naming convention.
    ///
    /// Two textual shapes are probed. An assignment declaration
    /// (`type name = value`) takes precedence: the candidate is the last
    /// whitespace-separated token left of the first `=`. Otherwise a call
    /// shape (`name(...)`) is probed on lines that mention none of `if`,
    /// `for`, `while`: the candidate is the last token before the first `(`.
    /// Qualified call names containing `.` are exempt.
    #[must_use]
    pub fn is_violation(&self, line: &str) -> bool {
        let trimmed = line.trim();

        if trimmed.contains('=') && !trimmed.contains("==") {
            return self.assignment_violates(trimmed);
        }

        if trimmed.contains('(')
            && !trimmed.contains("if")
            && !trimmed.contains("for")
            && !trimmed.contains("while")
        {
            return self.call_violates(trimmed);
        }

        false
    }

    fn assignment_violates(&self, trimmed: &str) -> bool {
        let Some((before, after)) = trimmed.split_once('=') else {
            return false;
        };

        // Only the declaration shape is probed: at least a type token and a
        // name token on the left, something assigned on the right.
        if after.trim().is_empty() {
            return false;
        }
        let tokens: Vec<&str> = before.split_whitespace().collect();
        if tokens.len() < 2 {
            return false;
        }

        !self.is_camel_case(tokens[tokens.len() - 1])
    }

    fn call_violates(&self, trimmed: &str) -> bool {
        let before = trimmed.split('(').next().unwrap_or("").trim();
        let candidate = before.split_whitespace().last().unwrap_or("");

        !self.is_camel_case(candidate) && !candidate.contains('.')
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
