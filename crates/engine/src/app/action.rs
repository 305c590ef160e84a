//! The closed vocabulary of exploration actions.

use warren_domain::Direction;

/// One action a player can take during an exploration turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Go(Direction),
    ViewInventory,
    ViewStats,
    Attack,
    UseAbility,
    ViewMap,
    SwitchMode,
}

impl PlayerAction {
    /// The display label the UI offers and hands back.
    pub fn label(&self) -> String {
        match self {
            Self::Go(direction) => format!("Go {direction}"),
            Self::ViewInventory => "View Inventory".to_string(),
            Self::ViewStats => "View Stats".to_string(),
            Self::Attack => "Attack".to_string(),
            Self::UseAbility => "Use Ability".to_string(),
            Self::ViewMap => "View Map".to_string(),
            Self::SwitchMode => "Switch to Admin Mode".to_string(),
        }
    }

    /// Parse a label (case-insensitive). `None` for anything outside the
    /// vocabulary - the caller turns that into an unrecognized-action result.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "go north" => Some(Self::Go(Direction::North)),
            "go south" => Some(Self::Go(Direction::South)),
            "go east" => Some(Self::Go(Direction::East)),
            "go west" => Some(Self::Go(Direction::West)),
            "view inventory" => Some(Self::ViewInventory),
            "view stats" => Some(Self::ViewStats),
            "attack" => Some(Self::Attack),
            "use ability" => Some(Self::UseAbility),
            "view map" => Some(Self::ViewMap),
            "switch to admin mode" => Some(Self::SwitchMode),
            _ => None,
        }
    }

    /// The legal action set for a turn. Movement is always offered - walking
    /// into a missing exit is a normal outcome, not an illegal action - but
    /// combat only appears when there is something to fight.
    pub fn legal(monsters_present: bool) -> Vec<PlayerAction> {
        let mut actions: Vec<PlayerAction> =
            Direction::ALL.into_iter().map(PlayerAction::Go).collect();
        if monsters_present {
            actions.push(Self::Attack);
            actions.push(Self::UseAbility);
        }
        actions.extend([
            Self::ViewInventory,
            Self::ViewStats,
            Self::ViewMap,
            Self::SwitchMode,
        ]);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parsing() {
        for action in PlayerAction::legal(true) {
            assert_eq!(PlayerAction::from_label(&action.label()), Some(action));
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            PlayerAction::from_label("  GO NORTH "),
            Some(PlayerAction::Go(Direction::North))
        );
    }

    #[test]
    fn unknown_labels_parse_to_none() {
        assert_eq!(PlayerAction::from_label("dance"), None);
        assert_eq!(PlayerAction::from_label(""), None);
    }

    #[test]
    fn combat_actions_require_monsters() {
        let quiet = PlayerAction::legal(false);
        assert!(!quiet.contains(&PlayerAction::Attack));
        assert!(!quiet.contains(&PlayerAction::UseAbility));

        let hostile = PlayerAction::legal(true);
        assert!(hostile.contains(&PlayerAction::Attack));
        assert!(hostile.contains(&PlayerAction::UseAbility));
    }
}
