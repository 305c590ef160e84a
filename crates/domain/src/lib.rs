pub mod entities;
pub mod error;
pub mod graph;
pub mod ids;
pub mod value_objects;

pub use entities::{Ability, Item, Monster, MonsterKind, Player, Room};
pub use error::DomainError;
pub use graph::{audit_links, LinkViolation, ViolationKind};
pub use ids::{AbilityId, ItemId, MonsterId, PlayerId, RoomId};
pub use value_objects::{CharacterName, Direction, RoomName};
