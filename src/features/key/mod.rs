//! Key estimation modules
//!
//! Estimate a track's tonal center by correlating its pitch-class
//! histogram against Krumhansl-Kessler tonal hierarchy profiles
//! (12 tonics x major/minor = 24 candidates).

pub mod estimator;
pub mod profiles;

pub use estimator::{estimate_key, pitch_class_histogram};
pub use profiles::{rotated_profile, MAJOR_PROFILE, MINOR_PROFILE};

use crate::analysis::result::Key;

/// Key estimation result
#[derive(Debug, Clone)]
pub struct KeyDetectionResult {
    /// Detected key (best-correlated candidate)
    pub key: Key,

    /// Pearson correlation of the winning candidate
    pub score: f64,

    /// All 24 candidate scores, ranked highest first
    pub all_scores: Vec<(Key, f64)>,
}
