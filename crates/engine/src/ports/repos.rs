//! Repository port traits for world storage.
//!
//! The data collaborator behind these traits loads entities with their
//! references resolved (a room with its occupant ids and four neighbor ids,
//! a player with equipment and abilities) and persists mutations atomically
//! per action.

use async_trait::async_trait;
use warren_domain::{Monster, MonsterId, Player, PlayerId, Room, RoomId};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepo: Send + Sync {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, RepoError>;
    async fn save(&self, room: &Room) -> Result<(), RepoError>;
    async fn delete(&self, id: RoomId) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Room>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Player>, RepoError>;
    async fn save(&self, player: &Player) -> Result<(), RepoError>;

    /// Reassign the player's current room, updating occupant lists on both
    /// sides in one write.
    async fn update_room(&self, id: PlayerId, room_id: RoomId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonsterRepo: Send + Sync {
    async fn get(&self, id: MonsterId) -> Result<Option<Monster>, RepoError>;
    async fn save(&self, monster: &Monster) -> Result<(), RepoError>;
    async fn delete(&self, id: MonsterId) -> Result<(), RepoError>;
    async fn list_in_room(&self, room_id: RoomId) -> Result<Vec<Monster>, RepoError>;
}
