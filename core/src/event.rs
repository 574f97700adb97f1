//! Host notifications: everything the recorder consumes.
//!
//! RULE: The host delivers every notification on one dispatch thread.
//! Notifications never overlap with each other or with the tick callback.

use crate::{
    command::OperatorCommand,
    snapshot::{ActorSnapshot, TickSnapshot},
    types::WorldPoint,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle state of the host client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Unknown,
    Starting,
    LoginScreen,
    LoginScreenAuthenticator,
    LoggingIn,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

impl GameState {
    /// Raw numeric code the host uses for this state.
    pub fn code(&self) -> i32 {
        match self {
            Self::Unknown                  => -1,
            Self::Starting                 => 0,
            Self::LoginScreen              => 10,
            Self::LoginScreenAuthenticator => 11,
            Self::LoggingIn                => 20,
            Self::Loading                  => 25,
            Self::LoggedIn                 => 30,
            Self::ConnectionLost           => 40,
            Self::Hopping                  => 45,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown                  => "UNKNOWN",
            Self::Starting                 => "STARTING",
            Self::LoginScreen              => "LOGIN_SCREEN",
            Self::LoginScreenAuthenticator => "LOGIN_SCREEN_AUTHENTICATOR",
            Self::LoggingIn                => "LOGGING_IN",
            Self::Loading                  => "LOADING",
            Self::LoggedIn                 => "LOGGED_IN",
            Self::ConnectionLost           => "CONNECTION_LOST",
            Self::Hopping                  => "HOPPING",
        }
    }

    /// Inverse of [`GameState::code`]. Unrecognised codes map to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0  => Self::Starting,
            10 => Self::LoginScreen,
            11 => Self::LoginScreenAuthenticator,
            20 => Self::LoggingIn,
            25 => Self::Loading,
            30 => Self::LoggedIn,
            40 => Self::ConnectionLost,
            45 => Self::Hopping,
            _  => Self::Unknown,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

// ── Notifications ──────────────────────────────────────────────

/// A sound played for the local actor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoundEffectPlayed {
    pub sound_id: i32,
    pub delay:    i32,
}

/// A positional sound played somewhere in the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaSoundEffectPlayed {
    pub sound_id: i32,
    pub delay:    i32,
    pub range:    i32,
    pub scene_x:  i32,
    pub scene_y:  i32,
    /// The actor the host attributes the sound to, if any.
    #[serde(default)]
    pub source:   Option<ActorSnapshot>,
}

/// A ground item appeared. Accepted but not captured (see `TickAggregator::on_item_spawned`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSpawned {
    pub item_id:    i32,
    pub quantity:   i32,
    pub spawn_time: i32,
    pub location:   WorldPoint,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateChanged {
    pub game_state: GameState,
}

/// One line of a host feed: a notification, a tick boundary or an operator action.
/// Variants added over time. Never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    // ── Asynchronous notifications ─────────────────
    SoundEffectPlayed(SoundEffectPlayed),
    AreaSoundEffectPlayed {
        sound: AreaSoundEffectPlayed,
        /// The local actor at the moment the sound fired.
        #[serde(default)]
        local: Option<ActorSnapshot>,
    },
    ItemSpawned(ItemSpawned),
    GameStateChanged(GameStateChanged),

    // ── Tick boundary ──────────────────────────────
    GameTick(TickSnapshot),

    // ── Operator actions ───────────────────────────
    Command {
        command: OperatorCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_back_to_states() {
        for state in [
            GameState::Starting,
            GameState::LoginScreen,
            GameState::LoginScreenAuthenticator,
            GameState::LoggingIn,
            GameState::Loading,
            GameState::LoggedIn,
            GameState::ConnectionLost,
            GameState::Hopping,
        ] {
            assert_eq!(GameState::from_code(state.code()), state);
        }
        assert_eq!(GameState::from_code(999), GameState::Unknown);
    }

    #[test]
    fn display_carries_name_and_code() {
        assert_eq!(GameState::LoggedIn.to_string(), "LOGGED_IN (30)");
        assert_eq!(GameState::default().to_string(), "UNKNOWN (-1)");
    }
}
