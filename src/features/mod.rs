//! Melodic feature extraction stages
//!
//! The per-track pipeline, left to right:
//! - `melody`: monophonic reduction of timed note events
//! - `key`: tonal center estimation via profile correlation
//! - `normalize`: tonic rebasing and interval sequences
//! - `ngram`: fixed-width pattern windows
//! - `shape`: offset- and scale-invariant canonical shapes

pub mod key;
pub mod melody;
pub mod ngram;
pub mod normalize;
pub mod shape;

pub use key::{estimate_key, KeyDetectionResult};
pub use melody::reduce;
pub use ngram::ngrams;
pub use normalize::{intervals, to_tonic_relative};
pub use shape::canonicalize;
