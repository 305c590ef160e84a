//! World-definition loader.
//!
//! Reads a JSON document describing rooms (with neighbor links by room
//! name), monsters, and one player, and produces a seeded [`InMemoryWorld`].
//! Links are resolved strictly - a link naming a room that is not in the
//! document is a loader error - but the loader does not mirror links:
//! one-way passages stay as authored and are only warned about.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use warren_domain::{
    audit_links, Ability, CharacterName, Direction, DomainError, Item, Monster, MonsterKind,
    Player, Room, RoomId, RoomName,
};

use super::memory::InMemoryWorld;

#[derive(Debug, Deserialize)]
pub struct WorldDefinition {
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub monsters: Vec<MonsterDef>,
    pub player: Option<PlayerDef>,
}

#[derive(Debug, Deserialize)]
pub struct RoomDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub north: Option<String>,
    pub south: Option<String>,
    pub east: Option<String>,
    pub west: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonsterDef {
    pub name: String,
    pub health: i32,
    #[serde(default)]
    pub aggression: u32,
    pub kind: Option<MonsterKind>,
    pub room: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub health: Option<i32>,
    pub room: String,
    pub weapon: Option<ItemDef>,
    #[serde(default)]
    pub abilities: Vec<AbilityDef>,
}

#[derive(Debug, Deserialize)]
pub struct ItemDef {
    pub name: String,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub defense_bonus: i32,
}

#[derive(Debug, Deserialize)]
pub struct AbilityDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WorldFileError {
    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("duplicate room name '{0}'")]
    DuplicateRoom(String),
    #[error("'{referenced_by}' links to unknown room '{name}'")]
    UnknownRoom { name: String, referenced_by: String },
}

impl WorldDefinition {
    pub fn parse(json: &str) -> Result<Self, WorldFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the seeded world, resolving name links to ids.
    pub fn build(self) -> Result<InMemoryWorld, WorldFileError> {
        let mut ids_by_name: HashMap<String, RoomId> = HashMap::new();
        let mut rooms: Vec<Room> = Vec::with_capacity(self.rooms.len());

        for def in &self.rooms {
            let room = Room::new(RoomName::new(def.name.clone())?)
                .with_description(def.description.clone())
                .with_coordinates(def.x, def.y);
            if ids_by_name.insert(def.name.clone(), room.id).is_some() {
                return Err(WorldFileError::DuplicateRoom(def.name.clone()));
            }
            rooms.push(room);
        }

        let resolve = |name: &str, referenced_by: &str| -> Result<RoomId, WorldFileError> {
            ids_by_name
                .get(name)
                .copied()
                .ok_or_else(|| WorldFileError::UnknownRoom {
                    name: name.to_string(),
                    referenced_by: referenced_by.to_string(),
                })
        };

        for (room, def) in rooms.iter_mut().zip(&self.rooms) {
            let links = [
                (Direction::North, &def.north),
                (Direction::South, &def.south),
                (Direction::East, &def.east),
                (Direction::West, &def.west),
            ];
            for (direction, target) in links {
                if let Some(target) = target {
                    room.set_neighbor(direction, Some(resolve(target, &def.name)?));
                }
            }
        }

        for violation in audit_links(rooms.iter()) {
            tracing::warn!(
                from = %violation.from,
                to = %violation.to,
                direction = %violation.direction,
                kind = ?violation.kind,
                "world file contains an unmirrored link"
            );
        }

        let world = InMemoryWorld::new();
        for room in rooms {
            world.insert_room(room);
        }

        for def in self.monsters {
            let room_id = resolve(&def.room, &def.name)?;
            let mut monster = Monster::new(def.name, def.health, room_id)
                .with_aggression(def.aggression);
            if let Some(kind) = def.kind {
                monster = monster.with_kind(kind);
            }
            world.insert_monster(monster);
        }

        if let Some(def) = self.player {
            let room_id = resolve(&def.room, &def.name)?;
            let mut player = Player::new(CharacterName::new(def.name)?, room_id);
            if let Some(health) = def.health {
                player = player.with_health(health);
            }
            if let Some(weapon) = def.weapon {
                player = player.with_equipped(
                    Item::new(weapon.name)
                        .with_attack_bonus(weapon.attack_bonus)
                        .with_defense_bonus(weapon.defense_bonus),
                );
            }
            player = player.with_abilities(
                def.abilities
                    .into_iter()
                    .map(|a| Ability::new(a.name).with_description(a.description))
                    .collect(),
            );
            world.insert_player(player);
        }

        Ok(world)
    }
}

/// Read and build a world from a JSON file on disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<InMemoryWorld, WorldFileError> {
    let text = std::fs::read_to_string(path)?;
    WorldDefinition::parse(&text)?.build()
}
