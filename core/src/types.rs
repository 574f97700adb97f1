//! Shared primitive types used across the recorder.

use serde::{Deserialize, Serialize};

/// The host's server-tick counter. One tick = one simulation update.
pub type Tick = u64;

/// The host's client-side cycle counter (finer-grained than ticks).
pub type Cycle = i64;

/// Opaque, host-assigned identity of an actor. Stable while the actor
/// is loaded; two snapshots with the same handle refer to the same actor.
pub type ActorHandle = u64;

/// Raw id the host uses for "no animation" / "no graphic".
pub const NONE_ID: i32 = -1;

/// Map a raw host id to `None` when it carries the "none" sentinel.
pub fn active_id(raw: i32) -> Option<i32> {
    if raw == NONE_ID { None } else { Some(raw) }
}

/// A tile in world coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WorldPoint {
    pub x:     i32,
    pub y:     i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }
}

/// A point in scene-local coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}
