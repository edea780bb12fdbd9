//! Analysis result types

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::analysis::tally::PatternTally;

/// Musical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u8),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u8),
}

impl Key {
    /// Tonic pitch class (0-11)
    pub fn tonic(&self) -> u8 {
        match self {
            Key::Major(t) | Key::Minor(t) => t % 12,
        }
    }

    /// Get key name in musical notation (e.g., "C", "Am", "F#", "D#m")
    ///
    /// # Example
    ///
    /// ```
    /// use motif_miner::Key;
    ///
    /// assert_eq!(Key::Major(0).name(), "C");
    /// assert_eq!(Key::Major(6).name(), "F#");
    /// assert_eq!(Key::Minor(9).name(), "Am");
    /// ```
    pub fn name(&self) -> String {
        let note_names = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        match self {
            Key::Major(i) => note_names[*i as usize % 12].to_string(),
            Key::Minor(i) => format!("{}m", note_names[*i as usize % 12]),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A melodic pattern used as an opaque tally key
///
/// Both variants have structural equality, hashing, and a total order; the
/// order is the documented tie-break for equal counts in ranked reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    /// Exact interval n-gram
    Raw(Vec<i32>),

    /// Canonical shape in fixed-point: `values[i] / denom` is the rational
    /// shape value, `denom = 10^shape_rounding_digits`
    Shape {
        /// Fixed-point shape values, first element always zero
        values: Vec<i64>,
        /// Fixed-point denominator
        denom: i64,
    },
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Raw(values) => {
                write!(f, "(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
            Pattern::Shape { values, denom } => {
                write!(f, "(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", *v as f64 / *denom as f64)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One pattern with its occurrence count
#[derive(Debug, Clone, Serialize)]
pub struct PatternCount {
    /// The pattern key
    pub pattern: Pattern,

    /// Occurrences within the report's scope
    pub count: u64,
}

/// Per-track analysis output
///
/// Produced by [`crate::analyze_track`]; the tally is read-only once the
/// track's scan completes.
#[derive(Debug, Clone)]
pub struct TrackAnalysis {
    /// Detected key
    pub key: Key,

    /// Pearson correlation of the winning key candidate
    pub key_score: f64,

    /// Monophonic note count after reduction
    pub note_count: usize,

    /// Pattern occurrence counts for this track
    pub tally: PatternTally,
}

/// Per-track report entry
#[derive(Debug, Clone, Serialize)]
pub struct TrackReport {
    /// Track index within the file
    pub track: usize,

    /// Detected key
    pub key: Key,

    /// Pearson correlation of the winning key candidate
    pub key_score: f64,

    /// Monophonic note count after reduction
    pub notes: usize,

    /// Total pattern occurrences in the track
    pub pattern_occurrences: u64,

    /// Distinct patterns in the track
    pub distinct_patterns: usize,

    /// Most frequent patterns, count descending, limited to `top_k`
    pub top_patterns: Vec<PatternCount>,
}

/// Per-file report
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Source file path
    pub path: String,

    /// Reports for tracks that passed the note-count floor, in file order
    pub tracks: Vec<TrackReport>,
}

/// Corpus run metadata
#[derive(Debug, Clone, Serialize)]
pub struct CorpusMetadata {
    /// MIDI files discovered in the corpus directory
    pub files_scanned: usize,

    /// Files that failed to decode and were skipped
    pub files_failed: usize,

    /// Tracks that produced patterns
    pub tracks_analyzed: usize,

    /// Tracks skipped as degenerate (too short or no detectable key)
    pub tracks_skipped: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

/// Complete corpus mining report
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// Per-file reports, in discovery order
    pub files: Vec<FileReport>,

    /// Corpus-global most frequent patterns, limited to `top_k`
    pub global_patterns: Vec<PatternCount>,

    /// Run metadata
    pub metadata: CorpusMetadata,
}
