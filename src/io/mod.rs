//! MIDI input boundary
//!
//! Decodes Standard MIDI Files into per-track timed note events. The
//! analysis stages consume only note-on observations with an absolute
//! tick; delta accumulation happens here.

pub mod decoder;

pub use decoder::{decode_bytes, decode_file};

/// A timed note observation from the decoder
///
/// `time` is the absolute tick within the track, accumulated from the
/// per-event deltas in the source file. Velocity-0 note-ons (running-status
/// note-offs) are preserved so the reducer can apply the same onset filter
/// the rest of the pipeline is specified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedNoteEvent {
    /// Absolute tick of the event within its track
    pub time: u64,

    /// MIDI note number (0-127)
    pub pitch: u8,

    /// Note-on velocity (0-127); 0 means note-off in running status
    pub velocity: u8,
}
