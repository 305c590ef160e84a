//! Ability attack use case.

use std::sync::Arc;

use warren_domain::{PlayerId, RoomId};

use crate::ports::{MonsterRepo, PlayerRepo, RoomRepo, UiPort};

use super::{
    apply_damage, select_ability, select_target, CombatError, CombatReport, ABILITY_DAMAGE,
};

/// Resolve an ability use against a monster in the given room.
///
/// Abilities deal a flat damage regardless of which one is chosen; choosing
/// exists so the narrative can name the technique.
pub struct ResolveAbility {
    players: Arc<dyn PlayerRepo>,
    rooms: Arc<dyn RoomRepo>,
    monsters: Arc<dyn MonsterRepo>,
    ui: Arc<dyn UiPort>,
}

impl ResolveAbility {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        rooms: Arc<dyn RoomRepo>,
        monsters: Arc<dyn MonsterRepo>,
        ui: Arc<dyn UiPort>,
    ) -> Self {
        Self {
            players,
            rooms,
            monsters,
            ui,
        }
    }

    pub async fn execute(
        &self,
        player_id: PlayerId,
        room_id: RoomId,
    ) -> Result<CombatReport, CombatError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(CombatError::PlayerNotFound)?;

        if player.abilities.is_empty() {
            tracing::debug!(player = %player.name, "ability use without abilities");
            return Err(CombatError::NoAbilities);
        }

        let candidates = self.monsters.list_in_room(room_id).await?;
        if candidates.is_empty() {
            tracing::debug!(room = %room_id, "ability use with no targets");
            return Err(CombatError::NoTargets);
        }

        let ability = select_ability(&self.ui, player.abilities.clone()).await?;
        let target = select_target(&self.ui, candidates).await?;

        let mut report = apply_damage(
            &self.players,
            &self.rooms,
            &self.monsters,
            player,
            target,
            ABILITY_DAMAGE,
        )
        .await?;
        report.narrative = format!("You use {}!\n{}", ability.name, report.narrative);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warren_domain::{Ability, CharacterName, Monster, Player, Room, RoomName};

    use super::super::DEFEAT_EXPERIENCE;
    use super::*;
    use crate::ports::{MockMonsterRepo, MockPlayerRepo, MockRoomRepo, MockUiPort};

    fn arena() -> Room {
        Room::new(RoomName::new("Arena").unwrap())
    }

    fn caster_in(room: &Room, abilities: Vec<Ability>) -> Player {
        Player::new(CharacterName::new("Wren").unwrap(), room.id).with_abilities(abilities)
    }

    fn expect_player(players: &mut MockPlayerRepo, player: Player) {
        let id = player.id;
        players
            .expect_get()
            .withf(move |got| *got == id)
            .returning(move |_| Ok(Some(player.clone())));
    }

    fn build_use_case(
        players: MockPlayerRepo,
        rooms: MockRoomRepo,
        monsters: MockMonsterRepo,
        ui: MockUiPort,
    ) -> ResolveAbility {
        ResolveAbility::new(
            Arc::new(players),
            Arc::new(rooms),
            Arc::new(monsters),
            Arc::new(ui),
        )
    }

    #[tokio::test]
    async fn when_player_has_no_abilities_then_fails_without_touching_targets() {
        let room = arena();
        let player = caster_in(&room, vec![]);
        let player_id = player.id;

        let mut players = MockPlayerRepo::new();
        expect_player(&mut players, player);

        // No list_in_room expectation: reaching for targets would panic.
        let err = build_use_case(
            players,
            MockRoomRepo::new(),
            MockMonsterRepo::new(),
            MockUiPort::new(),
        )
        .execute(player_id, room.id)
        .await
        .unwrap_err();

        assert!(matches!(err, CombatError::NoAbilities));
    }

    #[tokio::test]
    async fn single_ability_is_implicit_and_deals_flat_damage() {
        let room = arena();
        let player = caster_in(&room, vec![Ability::new("Shield Bash")]);
        let player_id = player.id;
        let ogre = Monster::new("Ogre", 20, room.id);
        let ogre_id = ogre.id;

        let mut players = MockPlayerRepo::new();
        expect_player(&mut players, player);

        let mut monsters = MockMonsterRepo::new();
        let listed = ogre.clone();
        monsters
            .expect_list_in_room()
            .returning(move |_| Ok(vec![listed.clone()]));
        monsters
            .expect_save()
            .withf(move |m| m.id == ogre_id && m.health == 5)
            .times(1)
            .returning(|_| Ok(()));

        // One ability, one target: the UI is never prompted.
        let report = build_use_case(players, MockRoomRepo::new(), monsters, MockUiPort::new())
            .execute(player_id, room.id)
            .await
            .unwrap();

        assert_eq!(report.damage, ABILITY_DAMAGE);
        assert!(report.narrative.contains("You use Shield Bash!"));
        assert!(report.narrative.contains("Monster HP: 5"));
    }

    #[tokio::test]
    async fn multiple_abilities_are_resolved_through_the_ui_choice() {
        let room = arena();
        let player = caster_in(
            &room,
            vec![Ability::new("Shield Bash"), Ability::new("Ember Lash")],
        );
        let player_id = player.id;
        let ogre = Monster::new("Ogre", 40, room.id);

        let mut players = MockPlayerRepo::new();
        expect_player(&mut players, player);

        let mut monsters = MockMonsterRepo::new();
        let listed = ogre.clone();
        monsters
            .expect_list_in_room()
            .returning(move |_| Ok(vec![listed.clone()]));
        monsters
            .expect_save()
            .withf(|m| m.health == 25)
            .times(1)
            .returning(|_| Ok(()));

        let mut ui = MockUiPort::new();
        ui.expect_choose_option()
            .withf(|prompt, options| {
                prompt == "Choose an ability"
                    && options == ["Shield Bash".to_string(), "Ember Lash".to_string()]
            })
            .times(1)
            .returning(|_, _| "Ember Lash".to_string());

        let report = build_use_case(players, MockRoomRepo::new(), monsters, ui)
            .execute(player_id, room.id)
            .await
            .unwrap();

        assert!(report.narrative.contains("You use Ember Lash!"));
        assert_eq!(report.damage, ABILITY_DAMAGE);
    }

    #[tokio::test]
    async fn ability_defeat_grants_the_same_reward_as_an_attack() {
        let mut room = arena();
        let player = caster_in(&room, vec![Ability::new("Shield Bash")]);
        let player_id = player.id;
        let rat = Monster::new("Plague Rat", 9, room.id);
        let rat_id = rat.id;
        room.add_monster(rat_id);
        let room_id = room.id;

        let mut players = MockPlayerRepo::new();
        expect_player(&mut players, player);
        players
            .expect_save()
            .withf(move |p| p.experience == DEFEAT_EXPERIENCE)
            .times(1)
            .returning(|_| Ok(()));

        let mut rooms = MockRoomRepo::new();
        let stored = room.clone();
        rooms
            .expect_get()
            .returning(move |_| Ok(Some(stored.clone())));
        rooms
            .expect_save()
            .withf(move |r| !r.monsters.contains(&rat_id))
            .times(1)
            .returning(|_| Ok(()));

        let mut monsters = MockMonsterRepo::new();
        let listed = rat.clone();
        monsters
            .expect_list_in_room()
            .returning(move |_| Ok(vec![listed.clone()]));
        monsters
            .expect_delete()
            .withf(move |id| *id == rat_id)
            .times(1)
            .returning(|_| Ok(()));

        let report = build_use_case(players, rooms, monsters, MockUiPort::new())
            .execute(player_id, room_id)
            .await
            .unwrap();

        assert!(report.defeated);
        assert!(report.narrative.contains("Plague Rat is defeated"));
    }
}
