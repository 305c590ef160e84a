//! Read-only player queries: stats and inventory text.
//!
//! These never mutate anything; they load the player and format plain text
//! for the result envelope's detail channel.

use std::sync::Arc;

use warren_domain::PlayerId;

use crate::ports::{PlayerRepo, RepoError};

pub struct PlayerInfo {
    players: Arc<dyn PlayerRepo>,
}

impl PlayerInfo {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    pub async fn stats(&self, player_id: PlayerId) -> Result<String, InfoError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(InfoError::PlayerNotFound)?;

        let abilities = if player.abilities.is_empty() {
            "none".to_string()
        } else {
            player
                .abilities
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        Ok(format!(
            "Name: {}\nHealth: {}\nExperience: {}\nAbilities: {abilities}",
            player.name, player.health, player.experience
        ))
    }

    pub async fn inventory(&self, player_id: PlayerId) -> Result<String, InfoError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(InfoError::PlayerNotFound)?;

        Ok(match player.equipped {
            Some(item) => format!(
                "Equipped: {} ({:+} attack, {:+} defense)",
                item.name, item.attack_bonus, item.defense_bonus
            ),
            None => "You carry no equipment.".to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Storage error: {0}")]
    Repo(#[from] RepoError),
}
