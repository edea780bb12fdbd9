//! Configuration parameters for pattern mining

use crate::error::AnalysisError;

/// Minimum monophonic note count for a track to be analyzed.
///
/// Tracks below this floor yield no patterns at all. This is a hard floor,
/// not a tunable: shorter tracks cannot produce a meaningful n-gram.
pub const MIN_TRACK_NOTES: usize = 5;

/// Pattern mining configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Width of the interval n-gram window (default: 5)
    pub pattern_width: usize,

    /// Number of top patterns reported per track and for the corpus (default: 20)
    pub top_k: usize,

    /// Decimal digits kept when rounding canonical shape values (default: 3)
    ///
    /// Shapes are stored as fixed-point integers scaled by `10^digits` so
    /// that equal contours hash to the same key. Valid range: 1..=9.
    pub shape_rounding_digits: u32,

    /// Canonicalize n-grams into offset- and scale-invariant shapes (default: true)
    ///
    /// When disabled, raw interval n-grams are tallied instead, so only
    /// exact interval matches collapse to one pattern.
    pub shape_normalization: bool,
}

impl AnalysisConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `pattern_width` or `top_k`
    /// is zero, or `shape_rounding_digits` is outside 1..=9.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.pattern_width == 0 {
            return Err(AnalysisError::InvalidInput(
                "pattern_width must be positive".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(AnalysisError::InvalidInput(
                "top_k must be positive".to_string(),
            ));
        }
        if !(1..=9).contains(&self.shape_rounding_digits) {
            return Err(AnalysisError::InvalidInput(format!(
                "shape_rounding_digits must be in 1..=9, got {}",
                self.shape_rounding_digits
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pattern_width: 5,
            top_k: 20,
            shape_rounding_digits: 3,
            shape_normalization: true,
        }
    }
}
