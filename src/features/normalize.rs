//! Tonic-relative normalization
//!
//! Rebases a pitch sequence against the detected tonic and converts it to
//! a signed interval sequence, making all downstream patterns
//! key-invariant.

/// Rebase pitches to the tonic, modulo 12
///
/// Output values are scale degrees in `0..=11`. The subtraction wraps with
/// a mathematical modulo, so pitches below the tonic land in range rather
/// than going negative.
pub fn to_tonic_relative(notes: &[u8], tonic: u8) -> Vec<u8> {
    notes
        .iter()
        .map(|&pitch| ((i16::from(pitch) - i16::from(tonic)).rem_euclid(12)) as u8)
        .collect()
}

/// Successive differences of a degree sequence
///
/// Length is `len - 1`; sequences shorter than two notes yield no
/// intervals.
pub fn intervals(degrees: &[u8]) -> Vec<i32> {
    degrees
        .windows(2)
        .map(|pair| i32::from(pair[1]) - i32::from(pair[0]))
        .collect()
}
