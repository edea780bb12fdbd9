//! Analysis result and aggregation types

pub mod result;
pub mod tally;

pub use result::{
    CorpusMetadata, CorpusReport, FileReport, Key, Pattern, PatternCount, TrackAnalysis,
    TrackReport,
};
pub use tally::PatternTally;
