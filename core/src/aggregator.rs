//! Tick aggregator: merges everything that happened between two tick
//! boundaries into at most one `TickRecord`.
//!
//! EXECUTION ORDER per tick (fixed):
//!   1. tick number and lifecycle state
//!   2. local position (only when it moved)
//!   3. local animation / graphic (only when active)
//!   4. interaction target summary
//!   5. drain the event buffers
//!   6. projectile / graphic windows, applied during the drain
//!   7. inclusion: payload present AND session active
//!
//! RULES:
//!   - `on_tick` runs every tick whether or not the session is recording;
//!     the buffers are always drained so nothing leaks across ticks.
//!   - Log lines are written as events are seen, not at inclusion time.

use crate::{
    buffer::EventBuffers,
    event::{AreaSoundEffectPlayed, GameState, GameStateChanged, ItemSpawned, SoundEffectPlayed},
    record::{activity_details, AreaSoundRecord, InteractingSummary, SoundRecord, TickRecord},
    session::Session,
    snapshot::{ActorSnapshot, TickSnapshot},
    types::{active_id, Cycle, WorldPoint},
};

pub const LOADING_MARKER: &str = "---------| LOADING |----------";

/// What a tick boundary produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No local actor; nothing was assembled.
    Skipped,
    /// Only the mandatory fields; nothing to keep.
    Empty,
    /// Record had a payload and was appended.
    Recorded,
    /// Record had a payload but the session is not recording.
    NotRecording,
}

#[derive(Debug)]
pub struct TickAggregator {
    buffers:           EventBuffers,
    last_position:     Option<WorldPoint>,
    game_state:        GameState,
    projectile_window: Cycle,
}

impl TickAggregator {
    pub fn new(projectile_window: Cycle) -> Self {
        Self {
            buffers: EventBuffers::new(),
            last_position: None,
            game_state: GameState::Unknown,
            projectile_window,
        }
    }

    pub fn buffers(&self) -> &EventBuffers {
        &self.buffers
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn last_position(&self) -> Option<WorldPoint> {
        self.last_position
    }

    // ── Notification handlers ──────────────────────────────────

    pub fn on_sound(&mut self, event: &SoundEffectPlayed, session: &mut Session) {
        self.buffers.push_sound(SoundRecord { id: event.sound_id, delay: event.delay });
        session.log(format!("SOUND {}\t delay: {}", event.sound_id, event.delay));
    }

    /// Area sounds are kept only when their source and the local actor are
    /// engaged with each other. The detail line is logged either way.
    pub fn on_area_sound(
        &mut self,
        event: &AreaSoundEffectPlayed,
        local: Option<&ActorSnapshot>,
        session: &mut Session,
    ) {
        let mut details = format!(
            "AREA_SOUND {}\t delay: {}, range: {}, sceneX: {}, sceneY: {}",
            event.sound_id, event.delay, event.range, event.scene_x, event.scene_y
        );

        let engaged_source = match (event.source.as_ref(), local) {
            (Some(source), Some(local)) if local.engaged_with(source) => Some(source.label()),
            _ => None,
        };

        match engaged_source {
            Some(label) => {
                details.push_str(&format!(", source: {label}"));
                self.buffers.push_area_sound(AreaSoundRecord {
                    id:      event.sound_id,
                    delay:   event.delay,
                    range:   event.range,
                    scene_x: event.scene_x,
                    scene_y: event.scene_y,
                    source:  Some(label),
                });
            }
            None => log::trace!("area sound {} not attributed to an engaged actor", event.sound_id),
        }

        session.log(details);
    }

    /// Ground-item capture is not performed; the notification is accepted
    /// and dropped so the `groundItems` field stays empty.
    pub fn on_item_spawned(&mut self, event: &ItemSpawned) {
        log::trace!("ground item {} x{} ignored", event.item_id, event.quantity);
    }

    pub fn on_game_state_changed(&mut self, event: &GameStateChanged, session: &mut Session) {
        if event.game_state == GameState::Loading {
            session.log(LOADING_MARKER);
        }
        self.game_state = event.game_state;
    }

    // ── Tick boundary ──────────────────────────────────────────

    pub fn on_tick(&mut self, snapshot: &TickSnapshot, session: &mut Session) -> TickOutcome {
        let Some(local) = snapshot.local.as_ref() else {
            let dropped = self.buffers.discard();
            log::debug!("tick={} no local actor, skipped ({dropped} buffered events dropped)", snapshot.tick);
            return TickOutcome::Skipped;
        };

        let state = snapshot.game_state.unwrap_or(self.game_state);
        let mut record = TickRecord::new(snapshot.tick, state);

        if self.last_position != Some(local.position) {
            let p = local.position;
            record.position = Some(p);
            session.log(format!("POSITION {}, {}, {}", p.x, p.y, p.plane));
        }
        self.last_position = Some(local.position);

        record.animation_id = active_id(local.actor.animation);
        record.graphic_id = active_id(local.actor.graphic);
        if let Some(details) = activity_details(record.animation_id, record.graphic_id) {
            session.log(format!("PLAYER '{}'\t {details}", local.actor.name));
        }

        if let Some(target) = snapshot.interacting.as_ref() {
            let summary = InteractingSummary::from_actor(target);
            if let Some(line) = summary.log_line() {
                session.log(line);
            }
            record.interacting = Some(summary);
        }

        self.buffers.observe_projectiles(&snapshot.projectiles);
        self.buffers.observe_graphics(&snapshot.graphics_objects);
        let drained = self.buffers.drain(snapshot.cycle, self.projectile_window);

        for projectile in &drained.projectiles {
            session.log(projectile.log_line());
        }
        for graphic in &drained.graphics_spawned {
            session.log(graphic.log_line());
        }

        record.sounds = drained.sounds;
        record.area_sounds = drained.area_sounds;
        record.ground_items = drained.ground_items;
        record.projectiles = drained.projectiles;
        record.graphics_spawned = drained.graphics_spawned;

        if !record.has_payload() {
            return TickOutcome::Empty;
        }

        let tick = record.tick;
        if session.append(record) {
            log::debug!("tick={tick} recorded ({} total)", session.records().len());
            TickOutcome::Recorded
        } else {
            TickOutcome::NotRecording
        }
    }
}
