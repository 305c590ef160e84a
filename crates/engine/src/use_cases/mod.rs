//! Use cases - navigation, combat, and read-only player queries.

pub mod combat;
pub mod movement;
pub mod player_info;

pub use combat::{CombatError, CombatReport, ResolveAbility, ResolveAttack};
pub use movement::{MoveError, MoveReport, MoveTo};
pub use player_info::{InfoError, PlayerInfo};
