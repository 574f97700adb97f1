//! The recorder: owns all capture state from plugin start to plugin stop.
//!
//! RULES:
//!   - One `Recorder` per plugin lifetime. Nothing is held in globals.
//!   - The host calls in on a single thread; no locking anywhere.
//!   - Failures never escape as panics: a tick is skipped or a save
//!     did not happen, and the caller gets the error.

use crate::{
    aggregator::{TickAggregator, TickOutcome},
    command::OperatorCommand,
    config::TraceConfig,
    control::{FilenamePrompt, PersistControl, PersistOutcome, PresetPrompt},
    drop_capture::{DropOutcome, DropSession},
    error::TraceResult,
    event::{AreaSoundEffectPlayed, GameState, GameStateChanged, HostEvent, ItemSpawned, SoundEffectPlayed},
    session::{Session, SessionData},
    snapshot::{ActorSnapshot, TickSnapshot},
    store::SessionStore,
};

/// Running totals, for summaries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecorderStats {
    pub ticks_seen:     u64,
    pub ticks_skipped:  u64,
    pub ticks_recorded: u64,
    pub saves:          u64,
}

pub struct Recorder {
    session:    Session,
    aggregator: TickAggregator,
    persist:    PersistControl,
    drops:      DropSession,
    store:      SessionStore,
    stats:      RecorderStats,
}

impl Recorder {
    /// Plugin start: fresh, inactive session and empty buffers.
    pub fn start(config: &TraceConfig) -> Self {
        log::debug!(
            "recorder started: json={} txt={} drops={}",
            config.json_dir.display(),
            config.txt_dir.display(),
            config.drops_dir.display()
        );
        Self {
            session:    Session::new(),
            aggregator: TickAggregator::new(config.projectile_window),
            persist:    PersistControl::new(),
            drops:      DropSession::new(),
            store:      SessionStore::new(config),
            stats:      RecorderStats::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Lifecycle state last reported through `GameStateChanged`.
    pub fn game_state(&self) -> GameState {
        self.aggregator.game_state()
    }

    pub fn drops(&self) -> &DropSession {
        &self.drops
    }

    pub fn is_committed(&self) -> bool {
        self.persist.is_committed()
    }

    pub fn stats(&self) -> RecorderStats {
        self.stats
    }

    /// Text for the on-screen recording indicator.
    pub fn status_label(&self) -> &'static str {
        if self.session.is_active() { "Tracking" } else { "Not tracking" }
    }

    // ── Host notifications ─────────────────────────────────────

    pub fn on_sound(&mut self, event: &SoundEffectPlayed) {
        self.aggregator.on_sound(event, &mut self.session);
    }

    pub fn on_area_sound(&mut self, event: &AreaSoundEffectPlayed, local: Option<&ActorSnapshot>) {
        self.aggregator.on_area_sound(event, local, &mut self.session);
    }

    pub fn on_item_spawned(&mut self, event: &ItemSpawned) {
        self.aggregator.on_item_spawned(event);
    }

    pub fn on_game_state_changed(&mut self, event: &GameStateChanged) {
        self.aggregator.on_game_state_changed(event, &mut self.session);
    }

    pub fn on_tick(&mut self, snapshot: &TickSnapshot) -> TickOutcome {
        let outcome = self.aggregator.on_tick(snapshot, &mut self.session);
        self.stats.ticks_seen += 1;
        match outcome {
            TickOutcome::Skipped  => self.stats.ticks_skipped += 1,
            TickOutcome::Recorded => self.stats.ticks_recorded += 1,
            TickOutcome::Empty | TickOutcome::NotRecording => {}
        }
        outcome
    }

    // ── Operator controls ──────────────────────────────────────

    /// Flip recording; discards unsaved data in either direction.
    pub fn toggle_recording(&mut self) -> bool {
        let dropped = self.session.records().len();
        let active = self.session.toggle();
        log::info!("recording {} ({dropped} unsaved records discarded)", if active { "on" } else { "off" });
        active
    }

    pub fn persist(&mut self, prompt: &mut dyn FilenamePrompt) -> TraceResult<PersistOutcome> {
        let outcome = self
            .persist
            .invoke(&mut self.session, &self.store, prompt)
            .inspect_err(|e| log::warn!("session save failed: {e}"))?;
        if matches!(outcome, PersistOutcome::Saved(_)) {
            self.stats.saves += 1;
        }
        Ok(outcome)
    }

    pub fn toggle_drop_capture(&mut self, prompt: &mut dyn FilenamePrompt) -> TraceResult<DropOutcome> {
        self.drops
            .toggle(&self.store, prompt)
            .inspect_err(|e| log::warn!("drop capture save failed: {e}"))
    }

    /// Route one host event. Commands carrying a file name use it instead
    /// of asking `prompt`.
    pub fn dispatch(&mut self, event: HostEvent, prompt: &mut dyn FilenamePrompt) -> TraceResult<()> {
        match event {
            HostEvent::SoundEffectPlayed(ev)               => self.on_sound(&ev),
            HostEvent::AreaSoundEffectPlayed { sound, local } => self.on_area_sound(&sound, local.as_ref()),
            HostEvent::ItemSpawned(ev)                     => self.on_item_spawned(&ev),
            HostEvent::GameStateChanged(ev)                => self.on_game_state_changed(&ev),
            HostEvent::GameTick(snapshot) => {
                self.on_tick(&snapshot);
            }
            HostEvent::Command { command } => match command {
                OperatorCommand::ToggleRecording => {
                    self.toggle_recording();
                }
                OperatorCommand::Persist { file_name } => {
                    self.persist(&mut PresetPrompt::new(file_name, prompt))?;
                }
                OperatorCommand::ToggleDropCapture { file_name } => {
                    self.toggle_drop_capture(&mut PresetPrompt::new(file_name, prompt))?;
                }
            },
        }
        Ok(())
    }

    /// Plugin stop. Returns whatever was captured but never saved.
    pub fn stop(mut self) -> SessionData {
        let unsaved = self.session.take();
        if !unsaved.records.is_empty() || !unsaved.log_lines.is_empty() {
            log::warn!(
                "recorder stopped with {} unsaved records and {} log lines",
                unsaved.records.len(),
                unsaved.log_lines.len()
            );
        }
        unsaved
    }
}
