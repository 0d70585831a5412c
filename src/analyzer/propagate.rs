use std::ops::Range;

use crate::rules::indentation_level;

/// Expand a flagged line into its contiguous block.
///
/// The block is `start` plus every immediately following non-blank line
/// sharing the flagged line's indentation width; the first blank line or
/// differing width ends it. Once a block is misindented, every line of it at
/// the same depth shares the defect, so the single lookback signal becomes a
/// block-level flag.
///
/// Returns the half-open index range of the block; `start` is always
/// included.
#[must_use]
pub fn propagate_block(lines: &[&str], start: usize) -> Range<usize> {
    let depth = indentation_level(lines[start]);

    let mut end = start + 1;
    while end < lines.len()
        && !lines[end].trim().is_empty()
        && indentation_level(lines[end]) == depth
    {
        end += 1;
    }

    start..end
}

#[cfg(test)]
#[path = "propagate_tests.rs"]
mod tests;
