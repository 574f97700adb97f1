//! File persistence layer.
//!
//! RULE: Only store.rs touches the filesystem.
//! Session saves never overwrite: each artifact probes `{base}_1`,
//! `{base}_2`, … until its path is free. Drop-capture saves do not probe
//! and overwrite silently.

use crate::{
    config::TraceConfig,
    error::{TraceError, TraceResult},
    record::{GroundItem, TickRecord},
};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where a session save landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSession {
    pub json_path: PathBuf,
    pub txt_path:  PathBuf,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    json_dir:  PathBuf,
    txt_dir:   PathBuf,
    drops_dir: PathBuf,
}

impl SessionStore {
    pub fn new(config: &TraceConfig) -> Self {
        Self {
            json_dir:  config.json_dir.clone(),
            txt_dir:   config.txt_dir.clone(),
            drops_dir: config.drops_dir.clone(),
        }
    }

    /// First free path among `{dir}/{base}.{ext}`, `{dir}/{base}_1.{ext}`, …
    pub fn free_path(dir: &Path, base: &str, ext: &str) -> PathBuf {
        let mut path = dir.join(format!("{base}.{ext}"));
        let mut suffix = 1u32;
        while path.exists() {
            path = dir.join(format!("{base}_{suffix}.{ext}"));
            suffix += 1;
        }
        path
    }

    // ── Session ────────────────────────────────────────────────

    /// Write the records as pretty JSON and the log lines as plain text.
    /// The two names are de-collided independently of each other.
    pub fn save_session(
        &self,
        base: &str,
        records: &[TickRecord],
        log_lines: &[String],
    ) -> TraceResult<SavedSession> {
        ensure_dir(&self.json_dir)?;
        ensure_dir(&self.txt_dir)?;

        let json_path = Self::free_path(&self.json_dir, base, "json");
        let txt_path = Self::free_path(&self.txt_dir, base, "txt");

        write_json(&json_path, records)?;
        write_lines(&txt_path, log_lines)?;

        log::info!(
            "Saved {} records to {} and {} lines to {}",
            records.len(),
            json_path.display(),
            log_lines.len(),
            txt_path.display()
        );
        Ok(SavedSession { json_path, txt_path })
    }

    // ── Drop capture ───────────────────────────────────────────

    /// Write drop-capture items to `{drops_dir}/{base}.json`, replacing any
    /// existing file of that name.
    pub fn save_drops(&self, base: &str, items: &[GroundItem]) -> TraceResult<PathBuf> {
        ensure_dir(&self.drops_dir)?;
        let path = self.drops_dir.join(format!("{base}.json"));
        write_json(&path, items)?;
        log::info!("Saved {} drops to {}", items.len(), path.display());
        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> TraceResult<()> {
    fs::create_dir_all(dir).map_err(|e| TraceError::io(dir, e))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> TraceResult<()> {
    let file = File::create(path).map_err(|e| TraceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| TraceError::io(path, e))?;
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> TraceResult<()> {
    let file = File::create(path).map_err(|e| TraceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| TraceError::io(path, e))?;
    }
    writer.flush().map_err(|e| TraceError::io(path, e))?;
    Ok(())
}
