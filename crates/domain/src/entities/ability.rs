//! Ability entity - learned techniques a player can use in combat.

use serde::{Deserialize, Serialize};

use crate::ids::AbilityId;

/// A learned ability. Carries no damage stat: the combat resolver applies a
/// flat ability damage regardless of which ability is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AbilityId::new(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
