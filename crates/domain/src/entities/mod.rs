//! Domain entities - core game objects with identity.

mod ability;
mod item;
mod monster;
mod player;
mod room;

pub use ability::Ability;
pub use item::Item;
pub use monster::{Monster, MonsterKind};
pub use player::Player;
pub use room::Room;
