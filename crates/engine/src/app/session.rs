//! Session state: mode, current player, current room.
//!
//! Owned by the game loop and mutated only through these transitions. The
//! player and room are optional because an admin-mode session can exist
//! before any player data does (degraded boot).

use warren_domain::{PlayerId, RoomId};

/// Which top-level mode the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Exploration,
    Admin,
}

/// The mutable state held across turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub mode: GameMode,
    pub player: Option<PlayerId>,
    pub room: Option<RoomId>,
}

impl Session {
    /// An exploration session with an established player and room.
    pub fn exploring(player: PlayerId, room: RoomId) -> Self {
        Self {
            mode: GameMode::Exploration,
            player: Some(player),
            room: Some(room),
        }
    }

    /// An admin session with no established player.
    pub fn admin() -> Self {
        Self {
            mode: GameMode::Admin,
            player: None,
            room: None,
        }
    }

    pub fn switch_to_admin(&mut self) {
        self.mode = GameMode::Admin;
    }

    /// Apply a successful move: the current room changes, nothing else.
    pub fn enter_room(&mut self, room: RoomId) {
        self.room = Some(room);
    }
}
