//! Combat use cases.
//!
//! Target and ability selection are shared between the basic attack and the
//! ability attack: implicit when exactly one candidate exists, otherwise an
//! external choice resolved by exact name match against the candidates that
//! were offered.

mod ability;
mod attack;

pub use ability::ResolveAbility;
pub use attack::ResolveAttack;

use std::sync::Arc;

use warren_domain::{Ability, Monster, Player};

use crate::ports::{MonsterRepo, PlayerRepo, RepoError, RoomRepo, UiPort};

/// Damage of a bare-handed strike, before equipment bonuses.
pub const BASE_ATTACK_DAMAGE: i32 = 5;
/// Damage of any ability. Flat: abilities carry no damage stat.
pub const ABILITY_DAMAGE: i32 = 15;
/// Experience granted for each defeated monster.
pub const DEFEAT_EXPERIENCE: u32 = 50;

/// Result of one resolved attack or ability use.
#[derive(Debug, Clone)]
pub struct CombatReport {
    pub target_name: String,
    pub damage: i32,
    /// Health left after the hit; zero or below means the target is gone.
    pub remaining_health: i32,
    pub defeated: bool,
    pub experience_awarded: u32,
    pub narrative: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("There are no targets here")]
    NoTargets,
    #[error("You have no abilities")]
    NoAbilities,
    #[error("Selection '{0}' is not among the current candidates")]
    SelectionMismatch(String),
    #[error("Storage error: {0}")]
    Repo(#[from] RepoError),
}

/// Pick the target monster. The UI contract says a returned name is one of
/// the offered candidates; a mismatch is still mapped to an error rather
/// than trusted, so a misbehaving collaborator cannot crash the session.
pub(crate) async fn select_target(
    ui: &Arc<dyn UiPort>,
    mut monsters: Vec<Monster>,
) -> Result<Monster, CombatError> {
    if monsters.len() == 1 {
        return Ok(monsters.remove(0));
    }
    let names: Vec<String> = monsters.iter().map(|m| m.name.clone()).collect();
    let chosen = ui.choose_option("Choose a target", &names).await;
    monsters
        .into_iter()
        .find(|m| m.name == chosen)
        .ok_or(CombatError::SelectionMismatch(chosen))
}

/// Pick the ability to use, same policy as targets.
pub(crate) async fn select_ability(
    ui: &Arc<dyn UiPort>,
    mut abilities: Vec<Ability>,
) -> Result<Ability, CombatError> {
    if abilities.len() == 1 {
        return Ok(abilities.remove(0));
    }
    let names: Vec<String> = abilities.iter().map(|a| a.name.clone()).collect();
    let chosen = ui.choose_option("Choose an ability", &names).await;
    abilities
        .into_iter()
        .find(|a| a.name == chosen)
        .ok_or(CombatError::SelectionMismatch(chosen))
}

/// Subtract damage, remove the target on defeat, persist every mutation
/// before returning.
pub(crate) async fn apply_damage(
    players: &Arc<dyn PlayerRepo>,
    rooms: &Arc<dyn RoomRepo>,
    monsters: &Arc<dyn MonsterRepo>,
    mut player: Player,
    mut target: Monster,
    damage: i32,
) -> Result<CombatReport, CombatError> {
    target.take_damage(damage);

    if target.is_defeated() {
        // Gone from the world and from the room's occupant list, in one
        // coherent mutation set.
        monsters.delete(target.id).await?;
        if let Some(mut room) = rooms.get(target.current_room).await? {
            room.remove_monster(target.id);
            rooms.save(&room).await?;
        }
        player.grant_experience(DEFEAT_EXPERIENCE);
        players.save(&player).await?;

        tracing::info!(
            player = %player.name,
            monster = %target.name,
            experience = DEFEAT_EXPERIENCE,
            "monster defeated"
        );
        let narrative = format!(
            "You deal {damage} damage.\n{} is defeated! You gain {DEFEAT_EXPERIENCE} experience.",
            target.name
        );
        Ok(CombatReport {
            target_name: target.name,
            damage,
            remaining_health: target.health,
            defeated: true,
            experience_awarded: DEFEAT_EXPERIENCE,
            narrative,
        })
    } else {
        monsters.save(&target).await?;

        tracing::debug!(
            player = %player.name,
            monster = %target.name,
            damage,
            remaining = target.health,
            "hit"
        );
        let narrative = format!(
            "You hit {} for {damage} damage.\nMonster HP: {}",
            target.name, target.health
        );
        Ok(CombatReport {
            target_name: target.name,
            damage,
            remaining_health: target.health,
            defeated: false,
            experience_awarded: 0,
            narrative,
        })
    }
}
