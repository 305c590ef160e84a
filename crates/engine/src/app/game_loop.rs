//! Game-mode state machine and per-turn loop.
//!
//! Two states, no terminal state: `Exploration` turns run the render ->
//! choose -> dispatch -> show pipeline, `Admin` turns hand selections to the
//! admin collaborator. The loop runs until the hosting process exits.

use std::sync::Arc;

use crate::ports::{AdminPort, MonsterRepo, PlayerRepo, RepoError, RoomRepo, TurnView, UiPort};

use super::action::PlayerAction;
use super::dispatcher::Dispatcher;
use super::result::ActionResult;
use super::session::{GameMode, Session};

/// The admin-menu selection that transitions back to exploration.
pub const EXPLORE_WORLD: &str = "Explore world";

/// The admin menu. Everything except [`EXPLORE_WORLD`] is a self-loop
/// through the admin collaborator.
pub const ADMIN_ACTIONS: [&str; 5] = [
    EXPLORE_WORLD,
    "Manage rooms",
    "Manage characters",
    "Manage abilities",
    "Connect rooms",
];

pub struct GameLoop {
    rooms: Arc<dyn RoomRepo>,
    players: Arc<dyn PlayerRepo>,
    monsters: Arc<dyn MonsterRepo>,
    ui: Arc<dyn UiPort>,
    admin: Arc<dyn AdminPort>,
    dispatcher: Dispatcher,
    player_name: String,
    session: Session,
}

impl GameLoop {
    pub fn new(
        rooms: Arc<dyn RoomRepo>,
        players: Arc<dyn PlayerRepo>,
        monsters: Arc<dyn MonsterRepo>,
        ui: Arc<dyn UiPort>,
        admin: Arc<dyn AdminPort>,
        player_name: impl Into<String>,
    ) -> Self {
        let dispatcher = Dispatcher::new(
            rooms.clone(),
            players.clone(),
            monsters.clone(),
            ui.clone(),
        );
        Self {
            rooms,
            players,
            monsters,
            ui,
            admin,
            dispatcher,
            player_name: player_name.into(),
            session: Session::admin(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Establish the starting session: Exploration when the configured
    /// player and their room load, otherwise Admin (degraded boot).
    pub async fn bootstrap(&mut self) {
        self.session = match self.load_player_session().await {
            Ok(session) => session,
            Err(reason) => {
                tracing::warn!(
                    player = %self.player_name,
                    %reason,
                    "degraded boot: starting in admin mode"
                );
                Session::admin()
            }
        };
    }

    /// Run turns until the process exits.
    pub async fn run(&mut self) {
        loop {
            self.turn().await;
        }
    }

    /// One turn of whichever mode is active.
    pub async fn turn(&mut self) {
        match self.session.mode {
            GameMode::Exploration => self.exploration_turn().await,
            GameMode::Admin => self.admin_turn().await,
        }
    }

    async fn exploration_turn(&mut self) {
        let (Some(player_id), Some(room_id)) = (self.session.player, self.session.room) else {
            tracing::warn!("exploration turn without an established session");
            self.session = Session::admin();
            return;
        };

        // Reload everything fresh each turn so external authoring since the
        // last turn is visible.
        let room = match self.rooms.get(room_id).await {
            Ok(Some(room)) => room,
            Ok(None) => {
                tracing::warn!(room = %room_id, "current room no longer exists");
                self.session = Session::admin();
                return;
            }
            Err(error) => {
                self.show_world_fault(error).await;
                return;
            }
        };

        let player = match self.players.get(player_id).await {
            Ok(Some(player)) => player,
            Ok(None) => {
                tracing::warn!(player = %player_id, "current player no longer exists");
                self.session = Session::admin();
                return;
            }
            Err(error) => {
                self.show_world_fault(error).await;
                return;
            }
        };

        // A listing fault degrades to an empty room rather than ending the
        // turn: movement and views must stay available.
        let live_monsters = match self.monsters.list_in_room(room_id).await {
            Ok(monsters) => monsters,
            Err(error) => {
                tracing::error!(%error, room = %room_id, "failed to list monsters");
                Vec::new()
            }
        };

        let view = TurnView {
            room_name: room.name.to_string(),
            room_description: room.description.clone(),
            exits: room.exits().map(|(direction, _)| direction).collect(),
            monsters: live_monsters
                .iter()
                .map(|m| format!("{} ({} HP)", m.name, m.health))
                .collect(),
            player_name: player.name.to_string(),
            player_health: player.health,
            player_experience: player.experience,
        };

        let labels: Vec<String> = PlayerAction::legal(!live_monsters.is_empty())
            .iter()
            .map(PlayerAction::label)
            .collect();

        let label = self.ui.choose_action(&view, &labels).await;
        let result = self.dispatcher.dispatch(&label, &mut self.session).await;
        self.ui.show(&result).await;
    }

    async fn admin_turn(&mut self) {
        let labels: Vec<String> = ADMIN_ACTIONS.iter().map(|s| s.to_string()).collect();
        let choice = self.ui.choose_admin_action(&labels).await;

        if choice == EXPLORE_WORLD {
            match self.load_player_session().await {
                Ok(session) => {
                    self.session = session;
                }
                Err(reason) => {
                    tracing::warn!(%reason, "cannot enter exploration");
                    self.ui
                        .show(&ActionResult::fail(format!("Cannot explore: {reason}")))
                        .await;
                }
            }
        } else {
            self.admin.run(&choice).await;
        }
    }

    async fn load_player_session(&self) -> Result<Session, BootError> {
        let player = self
            .players
            .get_by_name(&self.player_name)
            .await?
            .ok_or(BootError::PlayerMissing)?;
        let room = self
            .rooms
            .get(player.current_room)
            .await?
            .ok_or(BootError::RoomMissing)?;

        tracing::info!(player = %player.name, room = %room.name, "session established");
        Ok(Session::exploring(player.id, room.id))
    }

    async fn show_world_fault(&self, error: RepoError) {
        tracing::error!(%error, "failed to read world state");
        self.ui
            .show(&ActionResult::fail(format!(
                "The world could not be read: {error}"
            )))
            .await;
    }
}

#[derive(Debug, thiserror::Error)]
enum BootError {
    #[error("player not found")]
    PlayerMissing,
    #[error("player's room not found")]
    RoomMissing,
    #[error(transparent)]
    Repo(#[from] RepoError),
}
