//! Tick records: the structured form written to the `.json` artifact.
//!
//! RULE: `tick` and `gameState` are always present. Every other field is
//! serialized only when it carries something, so a record's key count tells
//! whether anything happened that tick.

use crate::{
    event::GameState,
    snapshot::{ActorKind, ActorSnapshot},
    types::{active_id, Cycle, Tick, WorldPoint},
};
use serde::{Deserialize, Serialize};

/// Lifecycle state as written to disk: symbolic name plus raw code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateStamp {
    pub name: GameState,
    pub code: i32,
}

impl From<GameState> for StateStamp {
    fn from(state: GameState) -> Self {
        Self { name: state, code: state.code() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorSummary {
    pub name:      String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:        Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic:   Option<i32>,
}

/// The local actor's interaction target, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractingSummary {
    Player(ActorSummary),
    NonPlayer(ActorSummary),
}

impl InteractingSummary {
    pub fn from_actor(actor: &ActorSnapshot) -> Self {
        let mut summary = ActorSummary {
            name:      actor.name.clone(),
            id:        None,
            animation: active_id(actor.animation),
            graphic:   active_id(actor.graphic),
        };
        match actor.kind {
            ActorKind::Player => Self::Player(summary),
            ActorKind::NonPlayer { id } => {
                summary.id = Some(id);
                Self::NonPlayer(summary)
            }
        }
    }

    pub fn summary(&self) -> &ActorSummary {
        match self {
            Self::Player(s) | Self::NonPlayer(s) => s,
        }
    }

    /// Log line for the target, or `None` when it is idle.
    pub fn log_line(&self) -> Option<String> {
        let s = self.summary();
        let details = activity_details(s.animation, s.graphic)?;
        let who = match self {
            Self::Player(s) => format!("PLAYER '{}'", s.name),
            Self::NonPlayer(s) => match s.id {
                Some(id) => format!("NPC '{} ({id})'", s.name),
                None     => format!("NPC '{}'", s.name),
            },
        };
        Some(format!("{who}\t{details}"))
    }
}

/// `animation: A, gfx: G` with each part present only when active.
pub(crate) fn activity_details(animation: Option<i32>, graphic: Option<i32>) -> Option<String> {
    let parts: Vec<String> = animation
        .map(|a| format!("animation: {a}"))
        .into_iter()
        .chain(graphic.map(|g| format!("gfx: {g}")))
        .collect();
    if parts.is_empty() { None } else { Some(parts.join(", ")) }
}

// ── Buffered event records ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoundRecord {
    pub id:    i32,
    pub delay: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AreaSoundRecord {
    pub id:      i32,
    pub delay:   i32,
    pub range:   i32,
    pub scene_x: i32,
    pub scene_y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source:  Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroundItem {
    pub id:         i32,
    pub quantity:   i32,
    pub spawn_time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectileRecord {
    pub id:               i32,
    pub start_height:     i32,
    pub end_height:       i32,
    pub slope:            i32,
    pub remaining_cycles: i32,
    pub start_x:          i32,
    pub start_y:          i32,
}

impl ProjectileRecord {
    pub fn log_line(&self) -> String {
        format!(
            "PROJECTILE {}\tstartHeight: {}, endHeight: {}, slope: {}, duration: {}, x: {}, y: {}",
            self.id, self.start_height, self.end_height, self.slope,
            self.remaining_cycles, self.start_x, self.start_y
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicRecord {
    pub id:          i32,
    pub level:       i32,
    pub start_cycle: Cycle,
    pub x:           i32,
    pub y:           i32,
}

impl GraphicRecord {
    pub fn log_line(&self) -> String {
        format!(
            "GFX {}\tlevel: {}, start_cycle: {}, x: {}, y: {}",
            self.id, self.level, self.start_cycle, self.x, self.y
        )
    }
}

// ── Tick record ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickRecord {
    pub tick:             Tick,
    pub game_state:       StateStamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position:         Option<WorldPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_id:     Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_id:       Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interacting:      Option<InteractingSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sounds:           Vec<SoundRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub area_sounds:      Vec<AreaSoundRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ground_items:     Vec<GroundItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projectiles:      Vec<ProjectileRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphics_spawned: Vec<GraphicRecord>,
}

impl TickRecord {
    pub fn new(tick: Tick, state: GameState) -> Self {
        Self {
            tick,
            game_state:       state.into(),
            position:         None,
            animation_id:     None,
            graphic_id:       None,
            interacting:      None,
            sounds:           Vec::new(),
            area_sounds:      Vec::new(),
            ground_items:     Vec::new(),
            projectiles:      Vec::new(),
            graphics_spawned: Vec::new(),
        }
    }

    /// True when the record carries anything beyond `tick` and `gameState`.
    pub fn has_payload(&self) -> bool {
        self.position.is_some()
            || self.animation_id.is_some()
            || self.graphic_id.is_some()
            || self.interacting.is_some()
            || !self.sounds.is_empty()
            || !self.area_sounds.is_empty()
            || !self.ground_items.is_empty()
            || !self.projectiles.is_empty()
            || !self.graphics_spawned.is_empty()
    }
}
