//! The fixed argument deck.

use std::fmt;
use std::str::FromStr;

use ringlock_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Category tag on an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Positive framing.
    Boon,
    /// Negative framing.
    Bane,
}

/// Drop zone for an argument card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The "other" column.
    Left,
    /// The "agree" column; banes here count toward the win.
    Right,
}

impl FromStr for Zone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(DomainError::Validation(format!("unknown zone {other:?}"))),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Number of arguments in the deck.
pub const DECK_SIZE: usize = 6;

/// Identifier of an argument card, 0..6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ArgumentId(u8);

impl ArgumentId {
    /// Validates a card identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for ids outside the deck.
    pub fn new(id: u8) -> Result<Self, DomainError> {
        if usize::from(id) < DECK_SIZE {
            Ok(Self(id))
        } else {
            Err(DomainError::Validation(format!("no argument card {id}")))
        }
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for ArgumentId {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ArgumentId> for u8 {
    fn from(id: ArgumentId) -> Self {
        id.0
    }
}

/// A debate argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Card identifier.
    pub id: ArgumentId,
    /// Text printed on the card.
    pub text: &'static str,
    /// Category tag.
    pub stance: Stance,
}

/// The deck, in canonical (unshuffled) order.
pub const ARGUMENTS: [Argument; DECK_SIZE] = [
    Argument {
        id: ArgumentId(0),
        text: "Connects people globally",
        stance: Stance::Boon,
    },
    Argument {
        id: ArgumentId(1),
        text: "Threatens privacy",
        stance: Stance::Bane,
    },
    Argument {
        id: ArgumentId(2),
        text: "Empowers education",
        stance: Stance::Boon,
    },
    Argument {
        id: ArgumentId(3),
        text: "Job displacement",
        stance: Stance::Bane,
    },
    Argument {
        id: ArgumentId(4),
        text: "Increases dependency",
        stance: Stance::Bane,
    },
    Argument {
        id: ArgumentId(5),
        text: "Accelerates innovation",
        stance: Stance::Boon,
    },
];

/// Looks up a card.
#[must_use]
pub fn argument(id: ArgumentId) -> &'static Argument {
    &ARGUMENTS[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_three_banes_and_three_boons() {
        let banes = ARGUMENTS.iter().filter(|a| a.stance == Stance::Bane).count();
        assert_eq!(banes, 3);
        assert_eq!(ARGUMENTS.len() - banes, 3);
    }

    #[test]
    fn test_argument_id_deserializes_only_inside_the_deck() {
        let id: ArgumentId = serde_json::from_str("5").unwrap();
        assert_eq!(id.get(), 5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        assert!(serde_json::from_str::<ArgumentId>("6").is_err());
    }

    #[test]
    fn test_argument_ids_match_positions() {
        for (i, arg) in ARGUMENTS.iter().enumerate() {
            assert_eq!(arg.id.index(), i);
        }
    }

    #[test]
    fn test_argument_id_rejects_unknown_cards() {
        assert!(ArgumentId::new(5).is_ok());
        assert!(ArgumentId::new(6).is_err());
    }

    #[test]
    fn test_zone_parses_case_insensitively() {
        assert_eq!("Right".parse::<Zone>().unwrap(), Zone::Right);
        assert_eq!("l".parse::<Zone>().unwrap(), Zone::Left);
        assert!("middle".parse::<Zone>().is_err());
    }
}
