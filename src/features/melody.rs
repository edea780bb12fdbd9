//! Monophonic reduction
//!
//! Collapses a track's note-on events into one pitch per onset time. When
//! several notes share an onset, the highest pitch is kept as the melody
//! approximation and the lower voices are dropped. This is a deliberate
//! heuristic carried over unchanged: bass-heavy or multi-voice tracks may
//! misattribute the melodic line.

use std::collections::BTreeMap;

use crate::io::TimedNoteEvent;

/// Reduce timed note events to a monophonic pitch sequence
///
/// Only note-ons with positive velocity count as onsets; zero-velocity
/// events (running-status note-offs) are ignored. Output holds exactly one
/// pitch per distinct onset tick, in ascending tick order.
///
/// # Arguments
///
/// * `events` - Timed note events for one track, any order
///
/// # Returns
///
/// MIDI pitch numbers, one per distinct onset time. Empty input yields an
/// empty sequence; there are no error conditions.
pub fn reduce(events: &[TimedNoteEvent]) -> Vec<u8> {
    let mut onsets: BTreeMap<u64, u8> = BTreeMap::new();

    for event in events {
        if event.velocity == 0 {
            continue;
        }
        onsets
            .entry(event.time)
            .and_modify(|pitch| *pitch = (*pitch).max(event.pitch))
            .or_insert(event.pitch);
    }

    onsets.into_values().collect()
}
