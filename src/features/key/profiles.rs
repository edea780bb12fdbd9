//! Krumhansl-Kessler key profiles
//!
//! Empirically derived tonal hierarchy weights for major and minor keys,
//! rotated to any tonic for template correlation.
//!
//! # Reference
//!
//! Krumhansl, C. L., & Kessler, E. J. (1982). Tracing the Dynamic Changes in
//! Perceived Tonal Organization in a Spatial Representation of Musical Keys.
//! *Psychological Review*, 89(4), 334-368.

use crate::analysis::result::Key;

/// Major key profile, tonic at index 0 (C major as written)
pub const MAJOR_PROFILE: [f64; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile, tonic at index 0 (C minor as written)
pub const MINOR_PROFILE: [f64; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Profile for a concrete key, rotated so the tonic weight lands on the
/// key's pitch class
///
/// `rotated[pc] == base[(pc - tonic) mod 12]`, i.e. the weight a note with
/// pitch class `pc` carries in that key.
pub fn rotated_profile(key: Key) -> [f64; 12] {
    let (base, tonic) = match key {
        Key::Major(tonic) => (&MAJOR_PROFILE, tonic),
        Key::Minor(tonic) => (&MINOR_PROFILE, tonic),
    };
    let mut rotated = [0.0; 12];
    for (pc, slot) in rotated.iter_mut().enumerate() {
        *slot = base[(pc + 12 - tonic as usize) % 12];
    }
    rotated
}
