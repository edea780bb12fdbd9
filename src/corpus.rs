//! Corpus mining driver
//!
//! Discovers MIDI files in a directory, analyzes every track of every file
//! in parallel, and merges the per-track tallies into one corpus-global
//! frequency table. Files are independent units of work; the only shared
//! result, the global tally, is built by a sequential reduction after the
//! parallel phase, so no lock is needed.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::analysis::result::{CorpusMetadata, CorpusReport, FileReport, TrackReport};
use crate::analysis::tally::PatternTally;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::{analyze_track, io};

/// Algorithm version recorded in corpus metadata
const ALGORITHM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Discover MIDI files in a directory
///
/// Matches `.mid` and `.midi` extensions case-insensitively, one directory
/// level deep. Results are sorted by path for a deterministic processing
/// order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the directory cannot be read.
pub fn discover_midi_files(dir: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        AnalysisError::InvalidInput(format!("cannot read directory {}: {}", dir.display(), e))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_ascii_lowercase();
                    ext == "mid" || ext == "midi"
                })
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    log::info!("Discovered {} MIDI files in {}", files.len(), dir.display());
    Ok(files)
}

/// Outcome of mining one file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Per-track report for the file
    pub report: FileReport,

    /// Per-track tallies, in report order, for the global merge
    pub tallies: Vec<PatternTally>,

    /// Tracks skipped as degenerate
    pub tracks_skipped: usize,
}

/// Mine one MIDI file
///
/// Decodes the file and runs the per-track pipeline on every track.
/// Degenerate tracks (too short, no detectable key, or no pattern windows
/// at the configured width) are skipped silently and counted in the
/// outcome.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` for unreadable or malformed
/// files, and `AnalysisError::InvalidInput` for invalid configuration.
pub fn mine_file(path: &Path, config: &AnalysisConfig) -> Result<FileOutcome, AnalysisError> {
    config.validate()?;
    let tracks = io::decode_file(path)?;

    let mut reports = Vec::new();
    let mut tallies = Vec::new();
    let mut tracks_skipped = 0;

    for (index, events) in tracks.iter().enumerate() {
        match analyze_track(events, config)? {
            // A track can clear the note floor yet produce no windows when
            // its interval sequence is shorter than the pattern width; it
            // is omitted from the report like any other degenerate track.
            Some(analysis) if analysis.tally.is_empty() => tracks_skipped += 1,
            Some(analysis) => {
                reports.push(TrackReport {
                    track: index,
                    key: analysis.key,
                    key_score: analysis.key_score,
                    notes: analysis.note_count,
                    pattern_occurrences: analysis.tally.total(),
                    distinct_patterns: analysis.tally.distinct(),
                    top_patterns: analysis.tally.top(config.top_k),
                });
                tallies.push(analysis.tally);
            }
            None => tracks_skipped += 1,
        }
    }

    Ok(FileOutcome {
        report: FileReport {
            path: path.display().to_string(),
            tracks: reports,
        },
        tallies,
        tracks_skipped,
    })
}

/// Mine a whole corpus directory
///
/// Files are analyzed in parallel with rayon; per-track tallies are then
/// merged sequentially into the corpus-global tally, so concurrent
/// increments can never lose updates. Files that fail to decode are logged
/// at warn level and skipped; the run itself degrades gracefully
/// file-by-file.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an unreadable directory or
/// invalid configuration. Per-file decode failures are not fatal.
pub fn mine_corpus(dir: &Path, config: &AnalysisConfig) -> Result<CorpusReport, AnalysisError> {
    config.validate()?;
    let start_time = Instant::now();

    let files = discover_midi_files(dir)?;
    let files_scanned = files.len();

    let outcomes: Vec<Result<FileOutcome, AnalysisError>> = files
        .par_iter()
        .map(|path| mine_file(path, config))
        .collect();

    let mut reports = Vec::new();
    let mut global = PatternTally::new();
    let mut files_failed = 0;
    let mut tracks_analyzed = 0;
    let mut tracks_skipped = 0;

    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(outcome) => {
                tracks_analyzed += outcome.tallies.len();
                tracks_skipped += outcome.tracks_skipped;
                for tally in &outcome.tallies {
                    global.merge(tally);
                }
                reports.push(outcome.report);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                files_failed += 1;
            }
        }
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::info!(
        "Corpus mined: {} files ({} failed), {} tracks analyzed, {} skipped, {:.1}ms",
        files_scanned,
        files_failed,
        tracks_analyzed,
        tracks_skipped,
        processing_time_ms
    );

    Ok(CorpusReport {
        files: reports,
        global_patterns: global.top(config.top_k),
        metadata: CorpusMetadata {
            files_scanned,
            files_failed,
            tracks_analyzed,
            tracks_skipped,
            processing_time_ms,
            algorithm_version: ALGORITHM_VERSION.to_string(),
        },
    })
}
