//! Drop-capture session: a narrower sibling of the recording session.
//!
//! Nothing populates it yet: ground-item notifications are accepted and
//! ignored, so saves always write an empty array. Saves go through
//! `SessionStore::save_drops`, which overwrites without probing.

use crate::{
    control::{ask_file_name, FilenamePrompt},
    error::TraceResult,
    record::GroundItem,
    store::SessionStore,
};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Started,
    Saved(PathBuf),
    /// Capture stopped but no name was given; nothing written.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct DropSession {
    active:  bool,
    records: Vec<GroundItem>,
}

impl DropSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn records(&self) -> &[GroundItem] {
        &self.records
    }

    /// Flip capture. Turning it off prompts for a name and writes the items.
    pub fn toggle(
        &mut self,
        store: &SessionStore,
        prompt: &mut dyn FilenamePrompt,
    ) -> TraceResult<DropOutcome> {
        self.active = !self.active;
        if self.active {
            log::info!("drop capture started");
            return Ok(DropOutcome::Started);
        }

        let Some(base) = ask_file_name(prompt) else {
            log::debug!("drop capture stopped without a file name");
            return Ok(DropOutcome::Cancelled);
        };
        let path = store.save_drops(&base, &self.records)?;
        Ok(DropOutcome::Saved(path))
    }
}
