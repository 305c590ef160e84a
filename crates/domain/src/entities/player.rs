//! Player entity - the adventurer a session controls.

use serde::{Deserialize, Serialize};

use crate::entities::{Ability, Item};
use crate::ids::{PlayerId, RoomId};
use crate::value_objects::CharacterName;

/// Starting health for newly created players.
const STARTING_HEALTH: i32 = 100;

/// The player character.
///
/// Health is deliberately not clamped at zero: combat only removes monsters
/// on defeat, and what happens to a player at or below zero health is decided
/// by the hosting layer, not here. Experience only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: CharacterName,
    pub health: i32,
    pub experience: u32,
    /// The room this player currently occupies. Exactly one at all times.
    pub current_room: RoomId,
    /// Equipped weapon/armor, if any.
    pub equipped: Option<Item>,
    pub abilities: Vec<Ability>,
}

impl Player {
    pub fn new(name: CharacterName, starting_room: RoomId) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            health: STARTING_HEALTH,
            experience: 0,
            current_room: starting_room,
            equipped: None,
            abilities: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: PlayerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_equipped(mut self, item: Item) -> Self {
        self.equipped = Some(item);
        self
    }

    pub fn with_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    /// Attack bonus granted by equipment (0 when bare-handed).
    pub fn attack_bonus(&self) -> i32 {
        self.equipped.as_ref().map_or(0, |item| item.attack_bonus)
    }

    pub fn grant_experience(&mut self, amount: u32) {
        self.experience += amount;
    }

    pub fn move_to(&mut self, room: RoomId) {
        self.current_room = room;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(CharacterName::new("Wren").unwrap(), RoomId::new())
    }

    #[test]
    fn bare_handed_attack_bonus_is_zero() {
        assert_eq!(player().attack_bonus(), 0);
    }

    #[test]
    fn equipped_weapon_grants_its_bonus() {
        let p = player().with_equipped(Item::new("Rusty Sword").with_attack_bonus(2));
        assert_eq!(p.attack_bonus(), 2);
    }

    #[test]
    fn experience_accumulates() {
        let mut p = player();
        p.grant_experience(50);
        p.grant_experience(50);
        assert_eq!(p.experience, 100);
    }
}
