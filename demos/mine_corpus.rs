//! Example: Mine melodic patterns from a whole MIDI corpus in parallel
//!
//! Usage:
//!   cargo run --release --example mine_corpus -- [--jobs N] [--json] [--width N] [--top K] [--raw] <dir>
//!
//! Notes:
//! - Parallelism is across files. Each track analysis is single-threaded.
//! - Default workers: (available CPU threads - 1), keeping one core free.

use std::env;
use std::path::Path;

use motif_miner::{mine_corpus, AnalysisConfig};

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism()
        .map(|v| v.get())
        .unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = AnalysisConfig::default();
    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut dir: Option<String> = None;

    let mut args: Vec<String> = env::args().skip(1).collect();
    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
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
                    "Usage: mine_corpus [--jobs N] [--json] [--width N] [--top K] [--raw] <dir>\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit the full report as JSON\n\
                     --width N  Interval n-gram width (default: 5)\n\
                     --top K    Patterns listed per scope (default: 20)\n\
                     --raw      Tally raw interval n-grams instead of shapes\n"
                );
                return Ok(());
            }
            _ => dir = Some(a),
        }
    }

    let dir = dir.ok_or("Provide a corpus directory. Use --help for usage.")?;
    let jobs = jobs.unwrap_or_else(default_jobs);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("Failed to build rayon thread pool");

    eprintln!("Mining corpus {} with {} workers", dir, jobs);
    let report = pool.install(|| mine_corpus(Path::new(&dir), &config))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for file in &report.files {
        println!("\n====== {} ======", file.path);
        for track in &file.tracks {
            println!(
                "\n-- Track {} | key {} (r={:.3}) | {} notes --",
                track.track, track.key, track.key_score, track.notes
            );
            for entry in &track.top_patterns {
                println!("{} {}", entry.pattern, entry.count);
            }
        }
    }

    println!("\n================ GLOBAL =================");
    for entry in &report.global_patterns {
        println!("{} {}", entry.pattern, entry.count);
    }

    let meta = &report.metadata;
    eprintln!(
        "\nDone: {} files ({} failed), {} tracks analyzed, {} skipped, {:.0}ms",
        meta.files_scanned,
        meta.files_failed,
        meta.tracks_analyzed,
        meta.tracks_skipped,
        meta.processing_time_ms
    );

    Ok(())
}
