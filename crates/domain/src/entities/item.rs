//! Item entity - equipment the engine only reads.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// A piece of equipment. Content authoring is external; the engine reads
/// the bonuses and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub defense_bonus: i32,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            attack_bonus: 0,
            defense_bonus: 0,
        }
    }

    pub fn with_attack_bonus(mut self, bonus: i32) -> Self {
        self.attack_bonus = bonus;
        self
    }

    pub fn with_defense_bonus(mut self, bonus: i32) -> Self {
        self.defense_bonus = bonus;
        self
    }
}
