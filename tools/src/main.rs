//! trace-runner: replays a recorded host feed through the recorder.
//!
//! Usage:
//!   trace-runner --feed session.jsonl
//!   trace-runner --feed - --out ./captures --config trace.json
//!
//! Each feed line is one `HostEvent` as JSON. Save commands without a
//! `file_name` ask on the terminal (only when the feed is not stdin).

use anyhow::{Context, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tickscope_core::{
    config::TraceConfig,
    control::FilenamePrompt,
    event::HostEvent,
    Recorder,
};

/// Reads file names from the terminal; cancels when stdin carries the feed.
struct ConsolePrompt {
    interactive: bool,
}

impl FilenamePrompt for ConsolePrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        if !self.interactive {
            log::warn!("no file name in feed and stdin is busy; save cancelled");
            return None;
        }
        print!("{message}");
        io::stdout().flush().ok()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer).ok()?;
        Some(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let feed = arg_value(&args, "--feed").unwrap_or("-");
    let config = match arg_value(&args, "--config") {
        Some(path) => TraceConfig::load(path)?,
        None => TraceConfig::default(),
    };
    let config = match arg_value(&args, "--out") {
        Some(root) => config.rooted_at(root),
        None => config,
    };

    let reader: Box<dyn BufRead> = if feed == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(feed).with_context(|| format!("Cannot open feed {feed}"))?;
        Box::new(BufReader::new(file))
    };
    let mut prompt = ConsolePrompt { interactive: feed != "-" };

    let mut recorder = Recorder::start(&config);
    let (lines, rejected) = replay(&mut recorder, reader, &mut prompt)?;
    print_summary(&recorder, lines, rejected);

    let unsaved = recorder.stop();
    if !unsaved.records.is_empty() {
        println!("  unsaved records discarded: {}", unsaved.records.len());
    }
    Ok(())
}

/// Dispatch every feed line. Malformed lines and failed saves are reported
/// and skipped; the replay keeps going.
fn replay(
    recorder: &mut Recorder,
    reader: Box<dyn BufRead>,
    prompt: &mut ConsolePrompt,
) -> Result<(u64, u64)> {
    let mut lines = 0u64;
    let mut rejected = 0u64;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        lines += 1;

        let event: HostEvent = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(e) => {
                let err_json = serde_json::json!({ "line": index + 1, "error": e.to_string() });
                eprintln!("{err_json}");
                rejected += 1;
                continue;
            }
        };

        if let Err(e) = recorder.dispatch(event, prompt) {
            log::error!("line {}: {e}", index + 1);
            rejected += 1;
        }
    }
    Ok((lines, rejected))
}

fn print_summary(recorder: &Recorder, lines: u64, rejected: u64) {
    let stats = recorder.stats();
    println!("=== REPLAY SUMMARY ===");
    println!("  feed lines:     {lines}");
    println!("  rejected:       {rejected}");
    println!("  ticks seen:     {}", stats.ticks_seen);
    println!("  ticks skipped:  {}", stats.ticks_skipped);
    println!("  ticks recorded: {}", stats.ticks_recorded);
    println!("  saves:          {}", stats.saves);
    println!("  recording:      {}", recorder.status_label());
    println!("  game state:     {}", recorder.game_state());
    println!("  held records:   {}", recorder.session().records().len());
    println!("  held lines:     {}", recorder.session().log_lines().len());
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
