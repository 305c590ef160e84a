//! Basic attack use case.

use std::sync::Arc;

use warren_domain::{PlayerId, RoomId};

use crate::ports::{MonsterRepo, PlayerRepo, RoomRepo, UiPort};

use super::{apply_damage, select_target, CombatError, CombatReport, BASE_ATTACK_DAMAGE};

/// Resolve a basic attack against a monster in the given room.
pub struct ResolveAttack {
    players: Arc<dyn PlayerRepo>,
    rooms: Arc<dyn RoomRepo>,
    monsters: Arc<dyn MonsterRepo>,
    ui: Arc<dyn UiPort>,
}

impl ResolveAttack {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        rooms: Arc<dyn RoomRepo>,
        monsters: Arc<dyn MonsterRepo>,
        ui: Arc<dyn UiPort>,
    ) -> Self {
        Self {
            players,
            rooms,
            monsters,
            ui,
        }
    }

    /// Execute the attack.
    ///
    /// Damage is the base strike plus the equipped weapon's attack bonus.
    pub async fn execute(
        &self,
        player_id: PlayerId,
        room_id: RoomId,
    ) -> Result<CombatReport, CombatError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(CombatError::PlayerNotFound)?;

        let candidates = self.monsters.list_in_room(room_id).await?;
        if candidates.is_empty() {
            tracing::debug!(room = %room_id, "attack with no targets");
            return Err(CombatError::NoTargets);
        }

        let target = select_target(&self.ui, candidates).await?;
        let damage = BASE_ATTACK_DAMAGE + player.attack_bonus();

        apply_damage(
            &self.players,
            &self.rooms,
            &self.monsters,
            player,
            target,
            damage,
        )
        .await
    }
}
