//! UI and admin collaborator ports.
//!
//! The UI collaborator renders state and collects exactly one choice per
//! call. Choice calls are infallible by contract: a blocking prompt always
//! returns a value, and a returned candidate is one of the candidates that
//! were offered. Rendering stays entirely on the far side of this boundary;
//! the engine hands over plain text only.

use async_trait::async_trait;
use warren_domain::Direction;

use crate::app::ActionResult;

/// Everything the UI needs to render one exploration turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnView {
    pub room_name: String,
    pub room_description: String,
    pub exits: Vec<Direction>,
    /// Display descriptors for monsters present, e.g. "Goblin (8 HP)".
    pub monsters: Vec<String>,
    pub player_name: String,
    pub player_health: i32,
    pub player_experience: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UiPort: Send + Sync {
    /// Render the turn and return one of the offered action labels.
    async fn choose_action(&self, view: &TurnView, actions: &[String]) -> String;

    /// Ask the player to pick one candidate (a target, an ability).
    async fn choose_option(&self, prompt: &str, options: &[String]) -> String;

    /// Display the outcome of a dispatched action.
    async fn show(&self, result: &ActionResult);

    /// Render the admin menu and return one of the offered labels.
    async fn choose_admin_action(&self, actions: &[String]) -> String;
}

/// The administrative CRUD collaborator. Selections other than the
/// explore-world transition are handed here verbatim; what they do is
/// opaque to the engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminPort: Send + Sync {
    async fn run(&self, selection: &str);
}
