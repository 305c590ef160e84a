//! Port traits for the engine's collaborators.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - World storage (reference adapter is in-memory; could swap in a database)
//! - Player prompting and rendering (console, TUI, network UI)
//! - Administrative authoring workflows

mod error;
mod repos;
mod ui;

pub use error::RepoError;
pub use repos::{MonsterRepo, PlayerRepo, RoomRepo};
pub use ui::{AdminPort, TurnView, UiPort};

// Test-only mocks (only available during test builds)
#[cfg(test)]
pub use repos::{MockMonsterRepo, MockPlayerRepo, MockRoomRepo};
#[cfg(test)]
pub use ui::{MockAdminPort, MockUiPort};
