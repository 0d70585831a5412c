/// Computed leading-whitespace width of a line: each space counts as 1,
/// each tab as 4. Measurement stops at the first non-whitespace character.
#[must_use]
pub fn indentation_level(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// Whether line `i` deepens indentation by more than `max_jump` relative to
/// the nearest preceding non-blank line.
///
/// Blank lines never flag. A line with no non-blank predecessor never flags.
/// Outdents of any size and deepenings up to `max_jump` are accepted; the
/// check is intentionally permissive toward going back out.
#[must_use]
pub fn improper_indentation(lines: &[&str], i: usize, max_jump: usize) -> bool {
    if lines[i].trim().is_empty() {
        return false;
    }

    let Some(prev) = lines[..i].iter().rposition(|line| !line.trim().is_empty()) else {
        return false;
    };

    indentation_level(lines[i]) > indentation_level(lines[prev]) + max_jump
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
