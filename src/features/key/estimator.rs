//! Key estimation by profile correlation
//!
//! Builds a pitch-class histogram for a monophonic note sequence and
//! Pearson-correlates it against all 24 rotated Krumhansl-Kessler
//! profiles. The best-correlated candidate wins.

use super::{profiles::rotated_profile, KeyDetectionResult};
use crate::analysis::result::Key;

/// Build a 12-bin pitch-class histogram
///
/// Bin `i` counts notes with `pitch % 12 == i`.
pub fn pitch_class_histogram(notes: &[u8]) -> [f64; 12] {
    let mut hist = [0.0; 12];
    for &note in notes {
        hist[note as usize % 12] += 1.0;
    }
    hist
}

/// Pearson correlation coefficient between two 12-bin vectors
///
/// Returns `None` when either vector has zero variance, where the
/// coefficient is undefined.
fn pearson(x: &[f64; 12], y: &[f64; 12]) -> Option<f64> {
    let n = 12.0;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..12 {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Estimate the key of a monophonic note sequence
///
/// Candidates are scanned tonic 0..=11 with major before minor at each
/// tonic, and only a strictly greater score replaces the incumbent, so ties
/// resolve to the lowest tonic, major first. A candidate whose correlation
/// is undefined scores as negative infinity rather than propagating a
/// numeric error.
///
/// # Arguments
///
/// * `notes` - Monophonic pitch sequence from [`crate::features::melody::reduce`]
///
/// # Returns
///
/// `None` when the input is empty or the histogram has zero variance (all
/// bins equal), which leaves every correlation undefined. Such tracks are
/// degenerate and contribute no patterns.
pub fn estimate_key(notes: &[u8]) -> Option<KeyDetectionResult> {
    if notes.is_empty() {
        return None;
    }

    let hist = pitch_class_histogram(notes);

    let mut all_scores = Vec::with_capacity(24);
    let mut best: Option<(Key, f64)> = None;
    let mut any_defined = false;

    for tonic in 0..12u8 {
        for key in [Key::Major(tonic), Key::Minor(tonic)] {
            let profile = rotated_profile(key);
            let score = match pearson(&hist, &profile) {
                Some(r) => {
                    any_defined = true;
                    r
                }
                None => f64::NEG_INFINITY,
            };
            all_scores.push((key, score));
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((key, score));
            }
        }
    }

    if !any_defined {
        log::debug!("Zero-variance pitch-class histogram, no key assigned");
        return None;
    }

    all_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let (key, score) = best?;

    log::debug!(
        "Estimated key {} (r={:.4}) from {} notes",
        key.name(),
        score,
        notes.len()
    );

    Some(KeyDetectionResult {
        key,
        score,
        all_scores,
    })
}
