//! Display-side severity merging, kept separate from the scanning pass.

use super::types::ViolationKind;

/// Pick the single most severe kind among the violations on one line, by the
/// fixed rank order. Used only by the rendering side for merged display; the
/// stored [`super::AnalysisResult`] is unaffected.
///
/// Returns `None` for an empty set.
pub fn most_severe<I>(kinds: I) -> Option<ViolationKind>
where
    I: IntoIterator<Item = ViolationKind>,
{
    kinds.into_iter().max_by_key(|kind| kind.severity_rank())
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
