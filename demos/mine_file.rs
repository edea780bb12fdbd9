//! Example: Mine melodic patterns from a single MIDI file
//!
//! Usage:
//!   cargo run --release --example mine_file -- [--width N] [--top K] [--raw] <file.mid>

use std::env;
use std::path::Path;

use motif_miner::{mine_file, AnalysisConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = AnalysisConfig::default();
    let mut path: Option<String> = None;

    let mut args: Vec<String> = env::args().skip(1).collect();
    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--width" => {
                config.pattern_width = args
                    .first()
                    .ok_or("--width requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
            }
            "--top" => {
                config.top_k = args
                    .first()
                    .ok_or("--top requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
            }
            "--raw" => config.shape_normalization = false,
            "--help" | "-h" => {
                eprintln!(
                    "Usage: mine_file [--width N] [--top K] [--raw] <file.mid>\n\
                     \n\
                     --width N  Interval n-gram width (default: 5)\n\
                     --top K    Patterns listed per track (default: 20)\n\
                     --raw      Tally raw interval n-grams instead of shapes\n"
                );
                return Ok(());
            }
            _ => path = Some(a),
        }
    }

    let path = path.ok_or("Provide a MIDI file path. Use --help for usage.")?;
    let outcome = mine_file(Path::new(&path), &config)?;

    println!("====== {} ======", outcome.report.path);
    if outcome.report.tracks.is_empty() {
        println!("(no analyzable tracks)");
    }
    for track in &outcome.report.tracks {
        println!(
            "\n-- Track {} | key {} (r={:.3}) | {} notes, {} patterns --",
            track.track, track.key, track.key_score, track.notes, track.pattern_occurrences
        );
        for entry in &track.top_patterns {
            println!("{} {}", entry.pattern, entry.count);
        }
    }

    Ok(())
}
