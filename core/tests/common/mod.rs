//! Builders shared by the integration tests.
#![allow(dead_code)]

use tickscope_core::{
    event::GameState,
    snapshot::{ActorKind, ActorSnapshot, LocalActor, ProjectileView, TickSnapshot},
    types::{ActorHandle, Cycle, Tick, WorldPoint, NONE_ID},
};

pub const LOCAL: ActorHandle = 1;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn player(handle: ActorHandle, name: &str) -> ActorSnapshot {
    ActorSnapshot {
        handle,
        kind: ActorKind::Player,
        name: name.to_string(),
        animation: NONE_ID,
        graphic: NONE_ID,
        interacting: None,
    }
}

pub fn npc(handle: ActorHandle, name: &str, id: i32) -> ActorSnapshot {
    ActorSnapshot {
        handle,
        kind: ActorKind::NonPlayer { id },
        name: name.to_string(),
        animation: NONE_ID,
        graphic: NONE_ID,
        interacting: None,
    }
}

pub fn local_at(x: i32, y: i32) -> LocalActor {
    LocalActor {
        actor: player(LOCAL, "Tester"),
        position: WorldPoint::new(x, y, 0),
    }
}

/// An idle local actor standing at (3200, 3200, 0).
pub fn idle_tick(tick: Tick) -> TickSnapshot {
    TickSnapshot {
        tick,
        cycle: tick as Cycle * 30,
        game_state: Some(GameState::LoggedIn),
        local: Some(local_at(3200, 3200)),
        interacting: None,
        projectiles: Vec::new(),
        graphics_objects: Vec::new(),
    }
}

pub fn projectile(id: i32, start_cycle: Cycle) -> ProjectileView {
    ProjectileView {
        id,
        start_height: 43,
        end_height: 31,
        slope: 16,
        remaining_cycles: 51,
        start_x: 6464,
        start_y: 6528,
        start_cycle,
    }
}
