//! Move-to use case.
//!
//! Handles player movement from the current room to a neighboring room.

use std::sync::Arc;

use warren_domain::{Direction, PlayerId, Room};

use crate::ports::{PlayerRepo, RepoError, RoomRepo};

/// Result of a successful move.
#[derive(Debug, Clone)]
pub struct MoveReport {
    /// The room the player now occupies.
    pub destination: Room,
    /// Arrival text: where the player went and what they see.
    pub narrative: String,
}

/// Move the player one room in a cardinal direction.
pub struct MoveTo {
    players: Arc<dyn PlayerRepo>,
    rooms: Arc<dyn RoomRepo>,
}

impl MoveTo {
    pub fn new(players: Arc<dyn PlayerRepo>, rooms: Arc<dyn RoomRepo>) -> Self {
        Self { players, rooms }
    }

    /// Execute the move.
    ///
    /// # Returns
    /// * `Ok(MoveReport)` - The player was reassigned to the destination room
    /// * `Err(MoveError)` - No exit that way, missing data, or a storage fault
    pub async fn execute(
        &self,
        player_id: PlayerId,
        direction: Direction,
    ) -> Result<MoveReport, MoveError> {
        // 1. Load the player and the room they occupy.
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(MoveError::PlayerNotFound)?;

        let room = self
            .rooms
            .get(player.current_room)
            .await?
            .ok_or(MoveError::CurrentRoomMissing)?;

        // 2. A missing link is a normal outcome, not an error.
        let Some(target_id) = room.neighbor(direction) else {
            tracing::debug!(player = %player.name, room = %room.name, %direction, "no exit");
            return Err(MoveError::NoExit(direction));
        };

        // 3. A link that points at a room nobody can load is a broken graph
        //    (deleted or never-authored destination). Distinct from NoExit.
        let Some(destination) = self.rooms.get(target_id).await? else {
            tracing::warn!(
                from = %room.id,
                to = %target_id,
                %direction,
                "dangling neighbor reference"
            );
            return Err(MoveError::DestinationMissing(direction));
        };

        // 4. Exactly one room reassignment, persisted before returning.
        self.players.update_room(player_id, destination.id).await?;

        tracing::info!(
            player = %player.name,
            from = %room.name,
            to = %destination.name,
            "player moved"
        );

        let narrative = format!(
            "You go {direction}.\n\n{}\n{}",
            destination.name, destination.description
        );
        Ok(MoveReport {
            destination,
            narrative,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Current room not found")]
    CurrentRoomMissing,
    #[error("You cannot go {0}")]
    NoExit(Direction),
    #[error("Room not found to the {0}")]
    DestinationMissing(Direction),
    #[error("Storage error: {0}")]
    Repo(#[from] RepoError),
}
