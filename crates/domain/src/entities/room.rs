//! Room entity - a node in the four-directional room graph.
//!
//! Neighbor fields store identifiers, never room values: the graph is an
//! arena of rooms indexed by id, and links resolve to room data only at the
//! point of use. A link from A to B is expected to be mirrored by the
//! opposite link from B to A ("bidirectional consistency"), but authoring is
//! external and the invariant is not enforced here - see `crate::graph` for
//! the audit that reports violations.

use serde::{Deserialize, Serialize};

use crate::ids::{MonsterId, PlayerId, RoomId};
use crate::value_objects::{Direction, RoomName};

/// A room: identity, description, grid position, up to four neighbors, and
/// the ids of its occupants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: RoomName,
    pub description: String,
    /// Grid coordinates, used by map rendering and authoring tools.
    pub x: i32,
    pub y: i32,
    pub north: Option<RoomId>,
    pub south: Option<RoomId>,
    pub east: Option<RoomId>,
    pub west: Option<RoomId>,
    #[serde(default)]
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub monsters: Vec<MonsterId>,
}

impl Room {
    pub fn new(name: RoomName) -> Self {
        Self {
            id: RoomId::new(),
            name,
            description: String::new(),
            x: 0,
            y: 0,
            north: None,
            south: None,
            east: None,
            west: None,
            players: Vec::new(),
            monsters: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_coordinates(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// The neighbor id in the given direction, if a link exists.
    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Set or clear the link in the given direction.
    pub fn set_neighbor(&mut self, direction: Direction, neighbor: Option<RoomId>) {
        match direction {
            Direction::North => self.north = neighbor,
            Direction::South => self.south = neighbor,
            Direction::East => self.east = neighbor,
            Direction::West => self.west = neighbor,
        }
    }

    /// All present links as (direction, neighbor id) pairs.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(dir).map(|id| (dir, id)))
    }

    pub fn has_monsters(&self) -> bool {
        !self.monsters.is_empty()
    }

    pub fn add_monster(&mut self, id: MonsterId) {
        if !self.monsters.contains(&id) {
            self.monsters.push(id);
        }
    }

    pub fn remove_monster(&mut self, id: MonsterId) {
        self.monsters.retain(|m| *m != id);
    }

    pub fn add_player(&mut self, id: PlayerId) {
        if !self.players.contains(&id) {
            self.players.push(id);
        }
    }

    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.retain(|p| *p != id);
    }
}
