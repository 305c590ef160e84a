//! In-memory world store.
//!
//! An arena of rooms, players, and monsters indexed by id, implementing the
//! three data ports. The mutex exists because the port traits are
//! `Send + Sync`, not for cross-turn concurrency - the engine is a
//! single-threaded turn loop. Guards are never held across an await.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use warren_domain::{Monster, MonsterId, Player, PlayerId, Room, RoomId};

use crate::ports::{MonsterRepo, PlayerRepo, RepoError, RoomRepo};

#[derive(Debug, Default)]
struct WorldState {
    rooms: HashMap<RoomId, Room>,
    players: HashMap<PlayerId, Player>,
    monsters: HashMap<MonsterId, Monster>,
}

/// Arena-backed implementation of `RoomRepo`, `PlayerRepo`, `MonsterRepo`.
#[derive(Debug, Default)]
pub struct InMemoryWorld {
    state: Mutex<WorldState>,
}

impl InMemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, WorldState>, RepoError> {
        self.state
            .lock()
            .map_err(|_| RepoError::storage("lock", "world state mutex poisoned"))
    }

    /// Seed a room. Seeding does not touch links; authoring sets those.
    pub fn insert_room(&self, room: Room) {
        if let Ok(mut state) = self.state() {
            state.rooms.insert(room.id, room);
        }
    }

    /// Seed a player and register them in their room's occupant list.
    pub fn insert_player(&self, player: Player) {
        if let Ok(mut state) = self.state() {
            if let Some(room) = state.rooms.get_mut(&player.current_room) {
                room.add_player(player.id);
            }
            state.players.insert(player.id, player);
        }
    }

    /// Seed a monster and register it in its room's occupant list.
    pub fn insert_monster(&self, monster: Monster) {
        if let Ok(mut state) = self.state() {
            if let Some(room) = state.rooms.get_mut(&monster.current_room) {
                room.add_monster(monster.id);
            }
            state.monsters.insert(monster.id, monster);
        }
    }
}

#[async_trait]
impl RoomRepo for InMemoryWorld {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError> {
        Ok(self.state()?.rooms.get(&id).cloned())
    }

    async fn save(&self, room: &Room) -> Result<(), RepoError> {
        self.state()?.rooms.insert(room.id, room.clone());
        Ok(())
    }

    async fn delete(&self, id: RoomId) -> Result<(), RepoError> {
        // Links pointing at the deleted room are left dangling on purpose:
        // the engine has to tolerate them, and authoring owns the cleanup.
        self.state()?.rooms.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Room>, RepoError> {
        Ok(self.state()?.rooms.values().cloned().collect())
    }
}

#[async_trait]
impl PlayerRepo for InMemoryWorld {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.state()?.players.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Player>, RepoError> {
        Ok(self
            .state()?
            .players
            .values()
            .find(|p| p.name.as_str() == name)
            .cloned())
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        self.state()?.players.insert(player.id, player.clone());
        Ok(())
    }

    async fn update_room(&self, id: PlayerId, room_id: RoomId) -> Result<(), RepoError> {
        let mut state = self.state()?;

        if !state.rooms.contains_key(&room_id) {
            return Err(RepoError::not_found("Room", room_id));
        }
        let old_room = match state.players.get(&id) {
            Some(player) => player.current_room,
            None => return Err(RepoError::not_found("Player", id)),
        };

        // One coherent write: both occupant lists and the player record.
        if let Some(room) = state.rooms.get_mut(&old_room) {
            room.remove_player(id);
        }
        if let Some(room) = state.rooms.get_mut(&room_id) {
            room.add_player(id);
        }
        if let Some(player) = state.players.get_mut(&id) {
            player.move_to(room_id);
        }
        Ok(())
    }
}

#[async_trait]
impl MonsterRepo for InMemoryWorld {
    async fn get(&self, id: MonsterId) -> Result<Option<Monster>, RepoError> {
        Ok(self.state()?.monsters.get(&id).cloned())
    }

    async fn save(&self, monster: &Monster) -> Result<(), RepoError> {
        self.state()?.monsters.insert(monster.id, monster.clone());
        Ok(())
    }

    async fn delete(&self, id: MonsterId) -> Result<(), RepoError> {
        let mut state = self.state()?;
        if let Some(monster) = state.monsters.remove(&id) {
            // Keep the store consistent even if the caller forgets the room.
            if let Some(room) = state.rooms.get_mut(&monster.current_room) {
                room.remove_monster(id);
            }
        }
        Ok(())
    }

    async fn list_in_room(&self, room_id: RoomId) -> Result<Vec<Monster>, RepoError> {
        Ok(self
            .state()?
            .monsters
            .values()
            .filter(|m| m.current_room == room_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use warren_domain::{CharacterName, RoomName};

    use super::*;

    fn named_room(name: &str) -> Room {
        Room::new(RoomName::new(name).unwrap())
    }

    #[tokio::test]
    async fn update_room_moves_the_player_between_occupant_lists() {
        let world = InMemoryWorld::new();
        let a = named_room("A");
        let b = named_room("B");
        let a_id = a.id;
        let b_id = b.id;
        world.insert_room(a);
        world.insert_room(b);

        let player = Player::new(CharacterName::new("Wren").unwrap(), a_id);
        let player_id = player.id;
        world.insert_player(player);

        PlayerRepo::update_room(&world, player_id, b_id)
            .await
            .unwrap();

        let a = RoomRepo::get(&world, a_id).await.unwrap().unwrap();
        let b = RoomRepo::get(&world, b_id).await.unwrap().unwrap();
        assert!(!a.players.contains(&player_id));
        assert!(b.players.contains(&player_id));

        let player = PlayerRepo::get(&world, player_id).await.unwrap().unwrap();
        assert_eq!(player.current_room, b_id);
    }

    #[tokio::test]
    async fn update_room_to_a_missing_room_is_rejected() {
        let world = InMemoryWorld::new();
        let a = named_room("A");
        let a_id = a.id;
        world.insert_room(a);

        let player = Player::new(CharacterName::new("Wren").unwrap(), a_id);
        let player_id = player.id;
        world.insert_player(player);

        let err = PlayerRepo::update_room(&world, player_id, RoomId::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        // Nothing moved.
        let player = PlayerRepo::get(&world, player_id).await.unwrap().unwrap();
        assert_eq!(player.current_room, a_id);
    }

    #[tokio::test]
    async fn deleting_a_monster_clears_its_occupant_entry() {
        let world = InMemoryWorld::new();
        let room = named_room("Arena");
        let room_id = room.id;
        world.insert_room(room);

        let goblin = Monster::new("Goblin", 10, room_id);
        let goblin_id = goblin.id;
        world.insert_monster(goblin);

        assert_eq!(
            MonsterRepo::list_in_room(&world, room_id).await.unwrap().len(),
            1
        );

        MonsterRepo::delete(&world, goblin_id).await.unwrap();

        assert!(MonsterRepo::get(&world, goblin_id).await.unwrap().is_none());
        let room = RoomRepo::get(&world, room_id).await.unwrap().unwrap();
        assert!(!room.monsters.contains(&goblin_id));
    }

    #[tokio::test]
    async fn get_by_name_finds_the_seeded_player() {
        let world = InMemoryWorld::new();
        let room = named_room("A");
        let room_id = room.id;
        world.insert_room(room);
        world.insert_player(Player::new(CharacterName::new("Wren").unwrap(), room_id));

        let found = PlayerRepo::get_by_name(&world, "Wren").await.unwrap();
        assert!(found.is_some());
        assert!(PlayerRepo::get_by_name(&world, "Nobody")
            .await
            .unwrap()
            .is_none());
    }
}
