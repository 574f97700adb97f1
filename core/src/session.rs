//! The recording session: tick records plus the parallel text log.
//!
//! RULE: `records` and `log_lines` are reset together, never one alone.
//! Appends only land while the session is active.

use crate::record::TickRecord;

/// A session's contents moved out in one piece.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub records:   Vec<TickRecord>,
    pub log_lines: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    active:    bool,
    records:   Vec<TickRecord>,
    log_lines: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip recording. Both directions discard whatever was captured.
    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.clear();
        self.active
    }

    /// Append an operator-facing log line. Ignored while inactive.
    pub fn log(&mut self, line: impl Into<String>) {
        if self.active {
            self.log_lines.push(line.into());
        }
    }

    /// Append a tick record. Returns false (and drops it) while inactive.
    pub fn append(&mut self, record: TickRecord) -> bool {
        if !self.active {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log_lines
    }

    /// Move the contents out, leaving the session empty (active flag untouched).
    pub fn take(&mut self) -> SessionData {
        SessionData {
            records:   std::mem::take(&mut self.records),
            log_lines: std::mem::take(&mut self.log_lines),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.log_lines.clear();
    }
}
