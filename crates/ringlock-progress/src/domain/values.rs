//! Value types shared by the progression model.

use std::fmt;

use ringlock_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of rings (one per puzzle).
pub const RING_COUNT: usize = 4;

/// Identifier of a narrative panel, e.g. `p2-text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    /// Wraps a panel identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One-based ring index, 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RingIndex(u8);

impl RingIndex {
    /// Ring earned by the color-mix puzzle.
    pub const FIRST: Self = Self(1);
    /// Ring earned by the argument-sort puzzle.
    pub const SECOND: Self = Self(2);
    /// Ring earned by the jigsaw puzzle.
    pub const THIRD: Self = Self(3);
    /// Ring earned by the date puzzle.
    pub const FOURTH: Self = Self(4);

    /// Validates a one-based ring index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` outside 1..=4.
    pub fn new(index: u8) -> Result<Self, DomainError> {
        if (1..=4).contains(&index) {
            Ok(Self(index))
        } else {
            Err(DomainError::Validation(format!(
                "ring index {index} is outside 1..=4"
            )))
        }
    }

    /// The one-based index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for RingIndex {
    type Error = DomainError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<RingIndex> for u8 {
    fn from(ring: RingIndex) -> Self {
        ring.0
    }
}

impl fmt::Display for RingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a ring has been earned. Never goes back to `Locked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingState {
    /// The puzzle is unsolved.
    #[default]
    Locked,
    /// The puzzle is solved.
    Unlocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_index_accepts_one_through_four() {
        for i in 1..=4 {
            assert_eq!(RingIndex::new(i).unwrap().get(), i);
        }
    }

    #[test]
    fn test_ring_index_rejects_out_of_range() {
        assert!(RingIndex::new(0).is_err());
        assert!(RingIndex::new(5).is_err());
    }

    #[test]
    fn test_panel_id_serializes_as_plain_string() {
        let json = serde_json::to_value(PanelId::new("finale")).unwrap();
        assert_eq!(json, serde_json::json!("finale"));
    }
}
