//! Monster entity - hostile occupants of the room graph.

use serde::{Deserialize, Serialize};

use crate::ids::{MonsterId, RoomId};

/// Monster variant tag with variant-specific attributes.
///
/// Combat operates only on the common fields (`name`, `health`); variants
/// exist so authoring can attach flavor data without a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MonsterKind {
    #[default]
    Brute,
    Goblin {
        /// How likely this goblin is to pick the player's pocket on sight.
        sneakiness: u32,
    },
    Wraith {
        /// Whether this wraith can drift through closed exits.
        phasing: bool,
    },
}

/// A monster occupying a room.
///
/// Created by external authoring; removed from its room and from the world
/// the instant its health reaches zero or below during combat resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub health: i32,
    /// Informational only - combat ignores it, UIs may surface it.
    pub aggression: u32,
    #[serde(flatten)]
    pub kind: MonsterKind,
    pub current_room: RoomId,
}

impl Monster {
    pub fn new(name: impl Into<String>, health: i32, room: RoomId) -> Self {
        Self {
            id: MonsterId::new(),
            name: name.into(),
            health,
            aggression: 0,
            kind: MonsterKind::default(),
            current_room: room,
        }
    }

    pub fn with_id(mut self, id: MonsterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_kind(mut self, kind: MonsterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_aggression(mut self, aggression: u32) -> Self {
        self.aggression = aggression;
        self
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
