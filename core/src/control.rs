//! Operator controls: the filename prompt seam and the two-phase persist control.
//!
//! The persist control alternates: an invocation that saves arms the
//! `committed` flag, and the next invocation only disarms it without
//! touching disk. Operators clicking "save" twice get one save.

use crate::{
    error::TraceResult,
    session::Session,
    store::{SavedSession, SessionStore},
};

pub const FILENAME_PROMPT: &str = "Please input filename: ";

/// Host-side synchronous prompt for a base file name.
pub trait FilenamePrompt {
    /// Returns `None` when the operator cancels.
    fn ask(&mut self, message: &str) -> Option<String>;
}

impl<F> FilenamePrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn ask(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}

/// Answers with a preset name when one was supplied, otherwise asks `fallback`.
pub struct PresetPrompt<'a> {
    preset:   Option<String>,
    fallback: &'a mut dyn FilenamePrompt,
}

impl<'a> PresetPrompt<'a> {
    pub fn new(preset: Option<String>, fallback: &'a mut dyn FilenamePrompt) -> Self {
        Self { preset, fallback }
    }
}

impl FilenamePrompt for PresetPrompt<'_> {
    fn ask(&mut self, message: &str) -> Option<String> {
        match self.preset.take() {
            Some(name) => Some(name),
            None       => self.fallback.ask(message),
        }
    }
}

/// Ask for a base name; an empty answer counts as cancelled.
pub(crate) fn ask_file_name(prompt: &mut dyn FilenamePrompt) -> Option<String> {
    prompt.ask(FILENAME_PROMPT).filter(|name| !name.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved(SavedSession),
    /// Empty or cancelled name; nothing changed.
    Cancelled,
    /// The previous invocation saved; this one only reset the flag.
    Disarmed,
}

#[derive(Debug, Default)]
pub struct PersistControl {
    committed: bool,
}

impl PersistControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// The session is cleared only after both artifacts were written. On a
    /// write error nothing is reset and the error is returned.
    pub fn invoke(
        &mut self,
        session: &mut Session,
        store: &SessionStore,
        prompt: &mut dyn FilenamePrompt,
    ) -> TraceResult<PersistOutcome> {
        if self.committed {
            self.committed = false;
            log::debug!("persist control disarmed");
            return Ok(PersistOutcome::Disarmed);
        }

        let Some(base) = ask_file_name(prompt) else {
            log::debug!("persist cancelled: no file name");
            return Ok(PersistOutcome::Cancelled);
        };

        let saved = store.save_session(&base, session.records(), session.log_lines())?;
        session.clear();
        self.committed = true;
        Ok(PersistOutcome::Saved(saved))
    }
}
