//! Pieces, slots and riddles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of pieces, and of slots.
pub const PIECE_COUNT: usize = 4;

/// Why a drag payload or index does not name a piece or slot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    /// The payload is not a number.
    #[error("piece payload {0:?} is not a number")]
    NotANumber(String),

    /// The number is past the end of the board.
    #[error("index {0} is outside 0..4")]
    OutOfRange(u8),
}

/// Identifier of a jigsaw piece, 0..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PieceId(u8);

/// Index of a slot on the board, 0..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotIndex(u8);

macro_rules! board_index {
    ($ty:ident) => {
        impl $ty {
            /// Validates a raw index.
            ///
            /// # Errors
            ///
            /// Returns `PieceParseError::OutOfRange` past the end of the board.
            pub fn new(raw: u8) -> Result<Self, PieceParseError> {
                if usize::from(raw) < PIECE_COUNT {
                    Ok(Self(raw))
                } else {
                    Err(PieceParseError::OutOfRange(raw))
                }
            }

            /// The raw index.
            #[must_use]
            pub const fn get(self) -> u8 {
                self.0
            }

            pub(crate) const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = PieceParseError;

            fn try_from(raw: u8) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl FromStr for $ty {
            type Err = PieceParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| PieceParseError::NotANumber(s.to_owned()))?;
                Self::new(raw)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

board_index!(PieceId);
board_index!(SlotIndex);

impl SlotIndex {
    /// Every slot, in board order.
    #[must_use]
    pub fn all() -> [Self; PIECE_COUNT] {
        [Self(0), Self(1), Self(2), Self(3)]
    }

    /// The piece that belongs in this slot.
    #[must_use]
    pub const fn home_piece(self) -> PieceId {
        PieceId(self.0)
    }
}

/// A riddle guarding one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    /// Question shown to the player.
    pub prompt: String,
    /// Expected answer.
    pub answer: String,
}

impl Riddle {
    /// Creates a riddle.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Compares trimmed, lowercased input against the answer.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.answer.trim().to_lowercase()
    }
}
