//! Integration tests for the pattern mining engine
//!
//! Fixtures are synthetic Standard MIDI Files written in memory with
//! midly, so the tests exercise the real decode path end to end.

use std::fs;

use midly::num::{u15, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use motif_miner::io::decode_bytes;
use motif_miner::{
    analyze_track, mine_corpus, mine_file, AnalysisConfig, Key, Pattern, PatternTally,
};

/// Build an SMF where each track plays its pitches one per beat.
fn write_smf(tracks: &[&[u8]]) -> Vec<u8> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(480)),
    ));
    for pitches in tracks {
        let mut events = Vec::new();
        for (i, &pitch) in pitches.iter().enumerate() {
            events.push(TrackEvent {
                delta: u28::new(if i == 0 { 0 } else { 480 }),
                kind: TrackEventKind::Midi {
                    channel: u4::new(0),
                    message: MidiMessage::NoteOn {
                        key: u7::new(pitch),
                        vel: u7::new(100),
                    },
                },
            });
        }
        events.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        smf.tracks.push(events);
    }
    let mut bytes = Vec::new();
    smf.write(&mut bytes).expect("SMF write should succeed");
    bytes
}

const SCALE_RUN: [u8; 15] = [60, 62, 64, 65, 67, 69, 71, 72, 71, 69, 67, 65, 64, 62, 60];

fn raw_config(width: usize) -> AnalysisConfig {
    AnalysisConfig {
        pattern_width: width,
        shape_normalization: false,
        ..Default::default()
    }
}

#[test]
fn test_decode_then_analyze_scale_run() {
    let bytes = write_smf(&[&SCALE_RUN]);
    let tracks = decode_bytes(&bytes).expect("decode should succeed");
    assert_eq!(tracks.len(), 1);

    let analysis = analyze_track(&tracks[0], &raw_config(3))
        .expect("valid config")
        .expect("scale run is analyzable");

    assert_eq!(analysis.key, Key::Major(0));
    assert_eq!(analysis.note_count, SCALE_RUN.len());
    // 15 notes -> 14 intervals -> 12 width-3 windows
    assert_eq!(analysis.tally.total(), 12);
}

#[test]
fn test_transposed_file_yields_identical_patterns() {
    let up5: Vec<u8> = SCALE_RUN.iter().map(|&p| p + 5).collect();
    let base_tracks = decode_bytes(&write_smf(&[&SCALE_RUN])).unwrap();
    let up5_tracks = decode_bytes(&write_smf(&[&up5])).unwrap();

    for config in [raw_config(3), AnalysisConfig::default()] {
        let base = analyze_track(&base_tracks[0], &config).unwrap().unwrap();
        let moved = analyze_track(&up5_tracks[0], &config).unwrap().unwrap();

        assert_eq!(base.key, Key::Major(0));
        assert_eq!(moved.key, Key::Major(5));
        for entry in base.tally.top(usize::MAX) {
            assert_eq!(
                moved.tally.count(&entry.pattern),
                entry.count,
                "pattern {} should survive transposition",
                entry.pattern
            );
        }
    }
}

#[test]
fn test_short_tracks_are_skipped() {
    let bytes = write_smf(&[&[60, 64, 67, 64], &SCALE_RUN]);
    let tracks = decode_bytes(&bytes).unwrap();
    let config = AnalysisConfig::default();

    assert!(analyze_track(&tracks[0], &config).unwrap().is_none());
    assert!(analyze_track(&tracks[1], &config).unwrap().is_some());
}

#[test]
fn test_global_merge_sums_across_tracks() {
    // Two tracks, same melody: every global count is exactly double the
    // per-track count, regardless of merge order.
    let config = raw_config(3);
    let tracks = decode_bytes(&write_smf(&[&SCALE_RUN, &SCALE_RUN])).unwrap();

    let analyses: Vec<_> = tracks
        .iter()
        .map(|t| analyze_track(t, &config).unwrap().unwrap())
        .collect();

    let mut forward = PatternTally::new();
    for a in &analyses {
        forward.merge(&a.tally);
    }
    let mut backward = PatternTally::new();
    for a in analyses.iter().rev() {
        backward.merge(&a.tally);
    }

    for entry in analyses[0].tally.top(usize::MAX) {
        assert_eq!(forward.count(&entry.pattern), entry.count * 2);
        assert_eq!(backward.count(&entry.pattern), entry.count * 2);
    }
}

#[test]
fn test_shape_collapses_scaled_contours() {
    // Two melodies with the same contour at different interval magnitudes:
    // raw patterns differ, canonical shapes coincide.
    let narrow = [60u8, 62, 60, 62, 60, 62, 60]; // +2 -2 ...
    let wide = [60u8, 64, 60, 64, 60, 64, 60]; // +4 -4 ...

    let tracks = decode_bytes(&write_smf(&[&narrow, &wide])).unwrap();

    let shape_config = AnalysisConfig {
        pattern_width: 3,
        ..Default::default()
    };
    let narrow_shapes = analyze_track(&tracks[0], &shape_config).unwrap().unwrap();
    let wide_shapes = analyze_track(&tracks[1], &shape_config).unwrap().unwrap();
    for entry in narrow_shapes.tally.top(usize::MAX) {
        assert_eq!(
            wide_shapes.tally.count(&entry.pattern),
            entry.count,
            "shape {} should be magnitude-invariant",
            entry.pattern
        );
    }

    let narrow_raw = analyze_track(&tracks[0], &raw_config(3)).unwrap().unwrap();
    let wide_raw = analyze_track(&tracks[1], &raw_config(3)).unwrap().unwrap();
    let top_narrow = narrow_raw.tally.top(1);
    assert_eq!(wide_raw.tally.count(&top_narrow[0].pattern), 0);
}

#[test]
fn test_mine_file_reports_per_track() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("two_tracks.mid");
    fs::write(&path, write_smf(&[&SCALE_RUN, &[60, 64, 67]])).unwrap();

    let outcome = mine_file(&path, &raw_config(3)).expect("file should mine");
    assert_eq!(outcome.report.tracks.len(), 1);
    assert_eq!(outcome.tracks_skipped, 1);

    let track = &outcome.report.tracks[0];
    assert_eq!(track.track, 0);
    assert_eq!(track.key, Key::Major(0));
    assert_eq!(track.pattern_occurrences, 12);
    assert!(!track.top_patterns.is_empty());
}

#[test]
fn test_track_without_windows_is_skipped() {
    // Five notes clear the note floor but leave only four intervals, one
    // short of the default width-5 window: the track yields no patterns
    // and is omitted from the report.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("five_notes.mid");
    fs::write(&path, write_smf(&[&[60, 62, 64, 65, 67]])).unwrap();

    let outcome = mine_file(&path, &AnalysisConfig::default()).expect("file should mine");
    assert!(outcome.report.tracks.is_empty());
    assert_eq!(outcome.tracks_skipped, 1);
}

#[test]
fn test_mine_corpus_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.mid"), write_smf(&[&SCALE_RUN])).unwrap();
    let up5: Vec<u8> = SCALE_RUN.iter().map(|&p| p + 5).collect();
    fs::write(dir.path().join("b.mid"), write_smf(&[&up5])).unwrap();
    fs::write(dir.path().join("broken.mid"), b"not a midi file").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

    let config = raw_config(3);
    let report = mine_corpus(dir.path(), &config).expect("corpus should mine");

    assert_eq!(report.metadata.files_scanned, 3);
    assert_eq!(report.metadata.files_failed, 1);
    assert_eq!(report.metadata.tracks_analyzed, 2);
    assert_eq!(report.files.len(), 2);

    // Transposition-invariant patterns from the two files merge: every
    // global count is double the single-track count.
    let single = analyze_track(
        &decode_bytes(&write_smf(&[&SCALE_RUN])).unwrap()[0],
        &config,
    )
    .unwrap()
    .unwrap();
    for entry in &report.global_patterns {
        assert_eq!(entry.count, single.tally.count(&entry.pattern) * 2);
    }

    // Report serializes cleanly
    let json = serde_json::to_string(&report).expect("report should serialize");
    assert!(json.contains("global_patterns"));
}

#[test]
fn test_flat_melody_produces_zero_shapes() {
    // A repeated single pitch long enough to pass the floor: every window
    // is flat, so the only shape is all-zero, guarded against division by
    // zero.
    let flat = [60u8; 8];
    let tracks = decode_bytes(&write_smf(&[&flat])).unwrap();
    let analysis = analyze_track(&tracks[0], &AnalysisConfig::default())
        .unwrap()
        .expect("flat melody still has a defined key");

    let top = analysis.tally.top(1);
    assert_eq!(
        top[0].pattern,
        Pattern::Shape {
            values: vec![0; 5],
            denom: 1000,
        }
    );
    assert_eq!(analysis.tally.distinct(), 1);
}
