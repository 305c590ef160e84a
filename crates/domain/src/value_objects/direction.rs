//! Cardinal directions for room-to-room links.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the four cardinal directions a room can link toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order exits are conventionally listed.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction leading back where this one came from.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Parse a direction from a string (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            other => Err(DomainError::parse(format!("unknown direction '{other}'"))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Direction::parse("NORTH").unwrap(), Direction::North);
        assert_eq!(Direction::parse("  west ").unwrap(), Direction::West);
    }

    #[test]
    fn parse_rejects_unknown_directions() {
        assert!(Direction::parse("up").is_err());
    }
}
