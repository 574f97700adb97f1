//! Drop-capture toggle: independent of recording, saves on the way off.

mod common;

use common::*;
use std::fs;
use tickscope_core::{config::TraceConfig, drop_capture::DropOutcome, Recorder};

#[test]
fn toggle_off_prompts_and_writes_empty_array() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = TraceConfig::default().rooted_at(dir.path());
    let mut rec = Recorder::start(&config);

    let mut asked = 0;
    let mut prompt = |_: &str| {
        asked += 1;
        Some("goblins".to_string())
    };

    assert_eq!(rec.toggle_drop_capture(&mut prompt).expect("start"), DropOutcome::Started);
    assert!(rec.drops().is_active());
    assert!(!rec.session().is_active(), "drop capture is independent of recording");

    let outcome = rec.toggle_drop_capture(&mut prompt).expect("stop");
    drop(prompt);
    assert_eq!(asked, 1, "only the transition to inactive prompts");

    let path = config.drops_dir.join("goblins.json");
    assert_eq!(outcome, DropOutcome::Saved(path.clone()));
    assert!(!rec.drops().is_active());
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn cancelled_name_stops_capture_without_writing() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = TraceConfig::default().rooted_at(dir.path());
    let mut rec = Recorder::start(&config);
    let mut cancel = |_: &str| -> Option<String> { None };

    rec.toggle_drop_capture(&mut cancel).expect("start");
    assert_eq!(rec.toggle_drop_capture(&mut cancel).expect("stop"), DropOutcome::Cancelled);
    assert!(!rec.drops().is_active());
    assert!(!config.drops_dir.exists());
}

#[test]
fn repeated_saves_under_one_name_overwrite() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let config = TraceConfig::default().rooted_at(dir.path());
    let mut rec = Recorder::start(&config);
    let mut prompt = |_: &str| Some("same".to_string());

    for _ in 0..2 {
        rec.toggle_drop_capture(&mut prompt).expect("start");
        rec.toggle_drop_capture(&mut prompt).expect("stop");
    }

    let entries: Vec<_> = fs::read_dir(&config.drops_dir).expect("read dir").collect();
    assert_eq!(entries.len(), 1, "no suffixed copies for drop captures");
    assert!(rec.drops().records().is_empty());
}
