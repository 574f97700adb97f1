//! Per-tick host snapshot: the live state the aggregator reads once per tick.
//!
//! Raw ids keep the host's `-1` sentinel; conversion to `Option` happens
//! when a record is assembled.

use crate::{
    event::GameState,
    types::{ActorHandle, Cycle, LocalPoint, Tick, WorldPoint, NONE_ID},
};
use serde::{Deserialize, Serialize};

fn none_id() -> i32 { NONE_ID }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    NonPlayer { id: i32 },
}

/// An actor as the host currently sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorSnapshot {
    pub handle:      ActorHandle,
    pub kind:        ActorKind,
    pub name:        String,
    #[serde(default = "none_id")]
    pub animation:   i32,
    #[serde(default = "none_id")]
    pub graphic:     i32,
    /// Handle of the actor this one is interacting with.
    #[serde(default)]
    pub interacting: Option<ActorHandle>,
}

impl ActorSnapshot {
    /// Display label: players by name, non-players as `name (id)`.
    pub fn label(&self) -> String {
        match self.kind {
            ActorKind::Player          => self.name.clone(),
            ActorKind::NonPlayer { id } => format!("{} ({id})", self.name),
        }
    }

    /// True when `self` and `other` are engaged with each other in either direction.
    pub fn engaged_with(&self, other: &ActorSnapshot) -> bool {
        self.interacting == Some(other.handle) || other.interacting == Some(self.handle)
    }
}

/// The operator-controlled actor plus its tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalActor {
    pub actor:    ActorSnapshot,
    pub position: WorldPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectileView {
    pub id:               i32,
    pub start_height:     i32,
    pub end_height:       i32,
    pub slope:            i32,
    pub remaining_cycles: i32,
    pub start_x:          i32,
    pub start_y:          i32,
    pub start_cycle:      Cycle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphicsObjectView {
    pub id:          i32,
    pub level:       i32,
    pub start_cycle: Cycle,
    pub location:    LocalPoint,
}

/// Everything the host hands over at a tick boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickSnapshot {
    pub tick:             Tick,
    /// Current client cycle; projectile and graphic windows are relative to it.
    pub cycle:            Cycle,
    /// When absent, the last state seen via `GameStateChanged` is used.
    #[serde(default)]
    pub game_state:       Option<GameState>,
    /// `None` between world loads.
    #[serde(default)]
    pub local:            Option<LocalActor>,
    /// The local actor's current interaction target.
    #[serde(default)]
    pub interacting:      Option<ActorSnapshot>,
    #[serde(default)]
    pub projectiles:      Vec<ProjectileView>,
    #[serde(default)]
    pub graphics_objects: Vec<GraphicsObjectView>,
}
