//! Action dispatcher.
//!
//! The single entry point mapping a UI-selected action label to an engine
//! call. Labels arrive from free-form external input, so this boundary
//! never panics and never lets a raw fault escape: every path ends in an
//! `ActionResult`, and the game loop only ever sees those.

use std::sync::Arc;

use warren_domain::{Direction, PlayerId, Room, RoomId};

use crate::ports::{MonsterRepo, PlayerRepo, RoomRepo, UiPort};
use crate::use_cases::{
    CombatError, CombatReport, InfoError, MoveError, MoveTo, PlayerInfo, ResolveAbility,
    ResolveAttack,
};

use super::action::PlayerAction;
use super::result::ActionResult;
use super::session::Session;

pub struct Dispatcher {
    move_to: MoveTo,
    attack: ResolveAttack,
    ability: ResolveAbility,
    info: PlayerInfo,
    rooms: Arc<dyn RoomRepo>,
}

impl Dispatcher {
    pub fn new(
        rooms: Arc<dyn RoomRepo>,
        players: Arc<dyn PlayerRepo>,
        monsters: Arc<dyn MonsterRepo>,
        ui: Arc<dyn UiPort>,
    ) -> Self {
        Self {
            move_to: MoveTo::new(players.clone(), rooms.clone()),
            attack: ResolveAttack::new(
                players.clone(),
                rooms.clone(),
                monsters.clone(),
                ui.clone(),
            ),
            ability: ResolveAbility::new(players.clone(), rooms.clone(), monsters, ui),
            info: PlayerInfo::new(players),
            rooms,
        }
    }

    /// Dispatch one action label against the current session.
    pub async fn dispatch(&self, label: &str, session: &mut Session) -> ActionResult {
        let Some(action) = PlayerAction::from_label(label) else {
            tracing::debug!(label, "unrecognized action");
            return ActionResult::fail(format!("Unrecognized action: {label}"));
        };

        let Some(player_id) = session.player else {
            return ActionResult::fail("No active player");
        };
        let Some(room_id) = session.room else {
            return ActionResult::fail("No active room");
        };

        match action {
            PlayerAction::Go(direction) => self.go(player_id, direction, session).await.erase(),
            PlayerAction::Attack => self.attack_action(player_id, room_id).await,
            PlayerAction::UseAbility => self.ability_action(player_id, room_id).await,
            PlayerAction::ViewStats => self.view_stats(player_id).await,
            PlayerAction::ViewInventory => self.view_inventory(player_id).await,
            PlayerAction::ViewMap => self.view_map(room_id).await,
            PlayerAction::SwitchMode => {
                session.switch_to_admin();
                tracing::info!("switching to admin mode");
                ActionResult::ok(
                    "Switching to admin mode.",
                    "Administrative tools are now active.",
                )
            }
        }
    }

    /// Movement keeps its typed result: the destination room rides along as
    /// the payload so the session (and any other caller) can use it.
    async fn go(
        &self,
        player_id: PlayerId,
        direction: Direction,
        session: &mut Session,
    ) -> ActionResult<Room> {
        match self.move_to.execute(player_id, direction).await {
            Ok(report) => {
                session.enter_room(report.destination.id);
                ActionResult::ok_with(
                    format!("You go {direction}."),
                    report.narrative,
                    report.destination,
                )
            }
            Err(MoveError::Repo(fault)) => Self::fault("move", fault),
            Err(expected) => ActionResult::fail(expected.to_string()),
        }
    }

    async fn attack_action(&self, player_id: PlayerId, room_id: RoomId) -> ActionResult {
        match self.attack.execute(player_id, room_id).await {
            Ok(report) => Self::combat_ok(report),
            Err(CombatError::Repo(fault)) => Self::fault("attack", fault),
            Err(fault @ CombatError::SelectionMismatch(_)) => Self::fault("attack", fault),
            Err(expected) => ActionResult::fail(expected.to_string()),
        }
    }

    async fn ability_action(&self, player_id: PlayerId, room_id: RoomId) -> ActionResult {
        match self.ability.execute(player_id, room_id).await {
            Ok(report) => Self::combat_ok(report),
            Err(CombatError::Repo(fault)) => Self::fault("use ability", fault),
            Err(fault @ CombatError::SelectionMismatch(_)) => Self::fault("use ability", fault),
            Err(expected) => ActionResult::fail(expected.to_string()),
        }
    }

    async fn view_stats(&self, player_id: PlayerId) -> ActionResult {
        match self.info.stats(player_id).await {
            Ok(text) => ActionResult::ok("Character stats", text),
            Err(InfoError::Repo(fault)) => Self::fault("view stats", fault),
            Err(expected) => ActionResult::fail(expected.to_string()),
        }
    }

    async fn view_inventory(&self, player_id: PlayerId) -> ActionResult {
        match self.info.inventory(player_id).await {
            Ok(text) => ActionResult::ok("Inventory", text),
            Err(InfoError::Repo(fault)) => Self::fault("view inventory", fault),
            Err(expected) => ActionResult::fail(expected.to_string()),
        }
    }

    async fn view_map(&self, room_id: RoomId) -> ActionResult {
        match self.rooms.get(room_id).await {
            Ok(Some(room)) => {
                let exits: Vec<String> = room.exits().map(|(dir, _)| dir.to_string()).collect();
                let exits = if exits.is_empty() {
                    "none".to_string()
                } else {
                    exits.join(", ")
                };
                ActionResult::ok(
                    "Map",
                    format!("{} ({}, {})\nExits: {exits}", room.name, room.x, room.y),
                )
            }
            Ok(None) => ActionResult::fail("Current room not found"),
            Err(fault) => Self::fault("view map", fault),
        }
    }

    fn combat_ok(report: CombatReport) -> ActionResult {
        let message = if report.defeated {
            format!("{} defeated!", report.target_name)
        } else {
            format!("You hit {}.", report.target_name)
        };
        ActionResult::ok(message, report.narrative)
    }

    /// An unexpected fault becomes a generic failure result; the session
    /// carries on.
    fn fault<T>(operation: &'static str, error: impl std::fmt::Display) -> ActionResult<T> {
        tracing::error!(operation, error = %error, "action failed unexpectedly");
        ActionResult::fail(format!("The action could not be completed: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warren_domain::{CharacterName, Monster, Player, Room, RoomName};

    use super::*;
    use crate::app::GameMode;
    use crate::ports::{MockMonsterRepo, MockPlayerRepo, MockRoomRepo, MockUiPort, RepoError};

    fn named_room(name: &str) -> Room {
        Room::new(RoomName::new(name).unwrap())
    }

    fn player_in(room: &Room) -> Player {
        Player::new(CharacterName::new("Wren").unwrap(), room.id)
    }

    fn build(
        rooms: MockRoomRepo,
        players: MockPlayerRepo,
        monsters: MockMonsterRepo,
    ) -> Dispatcher {
        Dispatcher::new(
            Arc::new(rooms),
            Arc::new(players),
            Arc::new(monsters),
            Arc::new(MockUiPort::new()),
        )
    }

    #[tokio::test]
    async fn unrecognized_labels_fail_without_touching_anything() {
        let dispatcher = build(
            MockRoomRepo::new(),
            MockPlayerRepo::new(),
            MockMonsterRepo::new(),
        );
        let mut session = Session::admin();

        let result = dispatcher.dispatch("make me a sandwich", &mut session).await;

        assert!(!result.success);
        assert!(result.message.contains("Unrecognized action"));
    }

    #[tokio::test]
    async fn sessions_without_a_player_fail_cleanly() {
        let dispatcher = build(
            MockRoomRepo::new(),
            MockPlayerRepo::new(),
            MockMonsterRepo::new(),
        );
        let mut session = Session::admin();

        let result = dispatcher.dispatch("Attack", &mut session).await;

        assert!(!result.success);
        assert_eq!(result.message, "No active player");
    }

    #[tokio::test]
    async fn successful_move_updates_the_session_room() {
        let mut origin = named_room("Gatehouse");
        let hall = named_room("Great Hall");
        origin.set_neighbor(Direction::North, Some(hall.id));
        let hall_id = hall.id;
        let origin_id = origin.id;

        let player = player_in(&origin);
        let player_id = player.id;

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));
        players.expect_update_room().returning(|_, _| Ok(()));

        let mut rooms = MockRoomRepo::new();
        rooms
            .expect_get()
            .withf(move |id| *id == origin_id)
            .returning(move |_| Ok(Some(origin.clone())));
        rooms
            .expect_get()
            .withf(move |id| *id == hall_id)
            .returning(move |_| Ok(Some(hall.clone())));

        let dispatcher = build(rooms, players, MockMonsterRepo::new());
        let mut session = Session::exploring(player_id, origin_id);

        let result = dispatcher.dispatch("Go North", &mut session).await;

        assert!(result.success);
        assert_eq!(session.room, Some(hall_id));
    }

    #[tokio::test]
    async fn blocked_move_fails_and_leaves_the_session_in_place() {
        let origin = named_room("Gatehouse");
        let origin_id = origin.id;
        let player = player_in(&origin);
        let player_id = player.id;

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let mut rooms = MockRoomRepo::new();
        rooms
            .expect_get()
            .returning(move |_| Ok(Some(origin.clone())));

        let dispatcher = build(rooms, players, MockMonsterRepo::new());
        let mut session = Session::exploring(player_id, origin_id);

        let result = dispatcher.dispatch("Go North", &mut session).await;

        assert!(!result.success);
        assert!(result.message.contains("You cannot go North"));
        assert_eq!(session.room, Some(origin_id));
    }

    #[tokio::test]
    async fn attack_in_an_empty_room_reports_no_targets() {
        let room = named_room("Quiet Chapel");
        let room_id = room.id;
        let player = player_in(&room);
        let player_id = player.id;

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let mut monsters = MockMonsterRepo::new();
        monsters.expect_list_in_room().returning(|_| Ok(vec![]));

        let dispatcher = build(MockRoomRepo::new(), players, monsters);
        let mut session = Session::exploring(player_id, room_id);

        let result = dispatcher.dispatch("Attack", &mut session).await;

        assert!(!result.success);
        assert_eq!(result.message, "There are no targets here");
    }

    #[tokio::test]
    async fn storage_faults_become_generic_failures() {
        let room = named_room("Quiet Chapel");
        let player = player_in(&room);
        let player_id = player.id;
        let room_id = room.id;

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let mut monsters = MockMonsterRepo::new();
        monsters
            .expect_list_in_room()
            .returning(|_| Err(RepoError::storage("list_in_room", "socket closed")));

        let dispatcher = build(MockRoomRepo::new(), players, monsters);
        let mut session = Session::exploring(player_id, room_id);

        let result = dispatcher.dispatch("Attack", &mut session).await;

        assert!(!result.success);
        assert!(result.message.contains("could not be completed"));
    }

    #[tokio::test]
    async fn view_stats_is_read_only() {
        let room = named_room("Quiet Chapel");
        let player = player_in(&room);
        let player_id = player.id;
        let room_id = room.id;

        // Only a read is expected; any write would panic the mock.
        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let dispatcher = build(MockRoomRepo::new(), players, MockMonsterRepo::new());
        let mut session = Session::exploring(player_id, room_id);
        let before = session.clone();

        let result = dispatcher.dispatch("View Stats", &mut session).await;

        assert!(result.success);
        assert!(result.detail.contains("Name: Wren"));
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn switch_mode_flips_the_session_to_admin() {
        let room = named_room("Quiet Chapel");
        let player_id = player_in(&room).id;
        let mut session = Session::exploring(player_id, room.id);

        let dispatcher = build(
            MockRoomRepo::new(),
            MockPlayerRepo::new(),
            MockMonsterRepo::new(),
        );

        let result = dispatcher.dispatch("Switch to Admin Mode", &mut session).await;

        assert!(result.success);
        assert_eq!(session.mode, GameMode::Admin);
    }

    #[tokio::test]
    async fn view_map_lists_the_rooms_exits() {
        let mut room = named_room("Gatehouse").with_coordinates(2, 3);
        let north = named_room("Wall Walk");
        room.set_neighbor(Direction::North, Some(north.id));
        let room_id = room.id;
        let player = player_in(&room);
        let player_id = player.id;

        let mut rooms = MockRoomRepo::new();
        rooms.expect_get().returning(move |_| Ok(Some(room.clone())));

        let dispatcher = build(rooms, MockPlayerRepo::new(), MockMonsterRepo::new());
        let mut session = Session::exploring(player_id, room_id);

        let result = dispatcher.dispatch("View Map", &mut session).await;

        assert!(result.success);
        assert!(result.detail.contains("Gatehouse (2, 3)"));
        assert!(result.detail.contains("Exits: North"));
    }

    #[tokio::test]
    async fn attack_with_one_monster_needs_no_prompt_and_reports_damage() {
        let room = named_room("Arena");
        let room_id = room.id;
        let player = player_in(&room);
        let player_id = player.id;
        let goblin = Monster::new("Goblin", 10, room_id);

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let mut monsters = MockMonsterRepo::new();
        let listed = goblin.clone();
        monsters
            .expect_list_in_room()
            .returning(move |_| Ok(vec![listed.clone()]));
        monsters.expect_save().returning(|_| Ok(()));

        let dispatcher = build(MockRoomRepo::new(), players, monsters);
        let mut session = Session::exploring(player_id, room_id);

        let result = dispatcher.dispatch("Attack", &mut session).await;

        assert!(result.success);
        assert!(result.detail.contains("Monster HP: 5"));
    }
}
