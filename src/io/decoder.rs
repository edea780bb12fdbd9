//! MIDI decoding using midly

use std::path::Path;

use crate::error::AnalysisError;
use crate::io::TimedNoteEvent;

/// Decode a Standard MIDI File into per-track note events
///
/// # Arguments
///
/// * `path` - Path to a `.mid`/`.midi` file
///
/// # Returns
///
/// One `Vec<TimedNoteEvent>` per SMF track, in file order. Tracks without
/// any note-on events decode to empty vectors.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be read or is
/// not a well-formed SMF.
pub fn decode_file(path: &Path) -> Result<Vec<Vec<TimedNoteEvent>>, AnalysisError> {
    log::debug!("Decoding MIDI file: {}", path.display());
    let data = std::fs::read(path).map_err(|e| {
        AnalysisError::DecodingError(format!("failed to read {}: {}", path.display(), e))
    })?;
    decode_bytes(&data)
}

/// Decode an in-memory Standard MIDI File
///
/// Walks each track, accumulating event deltas into absolute ticks, and
/// collects every channel note-on (velocity included, zero-velocity
/// note-offs preserved). All other event kinds are ignored.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the bytes are not a
/// well-formed SMF.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<Vec<TimedNoteEvent>>, AnalysisError> {
    let smf = midly::Smf::parse(data)
        .map_err(|e| AnalysisError::DecodingError(format!("SMF parse failed: {}", e)))?;

    let tracks: Vec<Vec<TimedNoteEvent>> = smf
        .tracks
        .iter()
        .map(|track| {
            let mut current_tick: u64 = 0;
            let mut events = Vec::new();
            for event in track {
                current_tick += u64::from(event.delta.as_int());
                if let midly::TrackEventKind::Midi {
                    message: midly::MidiMessage::NoteOn { key, vel },
                    ..
                } = event.kind
                {
                    events.push(TimedNoteEvent {
                        time: current_tick,
                        pitch: key.as_int(),
                        velocity: vel.as_int(),
                    });
                }
            }
            events
        })
        .collect();

    log::debug!(
        "Decoded {} tracks ({} note events total)",
        tracks.len(),
        tracks.iter().map(Vec::len).sum::<usize>()
    );
    Ok(tracks)
}
