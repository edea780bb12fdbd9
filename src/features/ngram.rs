//! Interval n-gram extraction
//!
//! Slides a fixed-width window over an interval sequence, producing every
//! overlapping pattern candidate in order. Deduplication happens later, in
//! the frequency tally.

/// Overlapping fixed-width windows over an interval sequence
///
/// Yields `len - width + 1` windows; none when the sequence is shorter
/// than `width`. Order-preserving and deterministic.
///
/// # Panics
///
/// Panics if `width` is zero; callers validate via
/// [`crate::config::AnalysisConfig::validate`].
pub fn ngrams(seq: &[i32], width: usize) -> impl Iterator<Item = &[i32]> {
    assert!(width > 0, "n-gram width must be positive");
    seq.windows(width)
}
