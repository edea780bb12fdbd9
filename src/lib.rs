//! # Motif Miner
//!
//! A melodic pattern mining engine for symbolic music corpora: finds
//! recurring key-invariant interval patterns and contour shapes across the
//! tracks of a MIDI file collection.
//!
//! ## Features
//!
//! - **Monophonic reduction**: highest-note melody approximation per onset
//! - **Key estimation**: Krumhansl-Kessler profile correlation over 24 keys
//! - **Key-invariant n-grams**: tonic-relative interval patterns
//! - **Canonical shapes**: offset- and scale-invariant contour keys
//! - **Corpus mining**: parallel per-file analysis with a merged global tally
//!
//! ## Quick Start
//!
//! ```
//! use motif_miner::{analyze_track, AnalysisConfig, TimedNoteEvent};
//!
//! // One note every beat, C major scale run
//! let events: Vec<TimedNoteEvent> = [60u8, 62, 64, 65, 67, 69, 71, 72]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &pitch)| TimedNoteEvent { time: i as u64 * 480, pitch, velocity: 100 })
//!     .collect();
//!
//! let analysis = analyze_track(&events, &AnalysisConfig::default())?
//!     .expect("track has enough notes to analyze");
//! println!("Key: {} ({} pattern occurrences)", analysis.key.name(), analysis.tally.total());
//! # Ok::<(), motif_miner::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The per-track pipeline flows strictly left to right:
//!
//! ```text
//! MIDI events → monophonic pitches → (key, tonic-relative degrees)
//!            → intervals → n-grams → (shapes) → frequency tally
//! ```
//!
//! Tracks are independent; only the corpus-global tally merge is shared,
//! and it runs as a sequential reduction after parallel analysis.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod io;

// Re-export main types
pub use analysis::result::{
    CorpusMetadata, CorpusReport, FileReport, Key, Pattern, PatternCount, TrackAnalysis,
    TrackReport,
};
pub use analysis::tally::PatternTally;
pub use config::{AnalysisConfig, MIN_TRACK_NOTES};
pub use corpus::{discover_midi_files, mine_corpus, mine_file};
pub use error::AnalysisError;
pub use io::TimedNoteEvent;

/// Analyze one track's note events into a pattern tally
///
/// Runs the full per-track pipeline: monophonic reduction, key estimation,
/// tonic-relative normalization, interval n-gram extraction, and (when
/// `config.shape_normalization` is set) shape canonicalization.
///
/// # Arguments
///
/// * `events` - Timed note events for one track, from [`io::decode_file`]
///   or any other decoder
/// * `config` - Mining configuration parameters
///
/// # Returns
///
/// `Ok(None)` for degenerate tracks: fewer than [`MIN_TRACK_NOTES`]
/// monophonic notes, or a pitch-class histogram with no defined profile
/// correlation. Degenerate tracks contribute zero patterns and are never
/// an error.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` only for invalid configuration.
pub fn analyze_track(
    events: &[TimedNoteEvent],
    config: &AnalysisConfig,
) -> Result<Option<TrackAnalysis>, AnalysisError> {
    config.validate()?;

    let notes = features::melody::reduce(events);
    if notes.len() < MIN_TRACK_NOTES {
        log::debug!(
            "Skipping track: {} monophonic notes (< {})",
            notes.len(),
            MIN_TRACK_NOTES
        );
        return Ok(None);
    }

    let key_result = match features::key::estimate_key(&notes) {
        Some(result) => result,
        None => {
            log::debug!("Skipping track: no detectable key");
            return Ok(None);
        }
    };

    let degrees = features::normalize::to_tonic_relative(&notes, key_result.key.tonic());
    let ivals = features::normalize::intervals(&degrees);

    let mut tally = PatternTally::new();
    for window in features::ngram::ngrams(&ivals, config.pattern_width) {
        let pattern = if config.shape_normalization {
            Pattern::Shape {
                values: features::shape::canonicalize(window, config.shape_rounding_digits),
                denom: 10i64.pow(config.shape_rounding_digits),
            }
        } else {
            Pattern::Raw(window.to_vec())
        };
        tally.add(pattern);
    }

    log::debug!(
        "Track analyzed: key={}, {} notes, {} pattern occurrences ({} distinct)",
        key_result.key.name(),
        notes.len(),
        tally.total(),
        tally.distinct()
    );

    Ok(Some(TrackAnalysis {
        key: key_result.key,
        key_score: key_result.score,
        note_count: notes.len(),
        tally,
    }))
}
