//! Story content: panels, riddles and the closing message.
//!
//! Stories are YAML documents. A built-in story is compiled into the crate;
//! presentation layers may load their own from disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ringlock_jigsaw::domain::board::{PIECE_COUNT, Riddle};
use ringlock_progress::domain::values::PanelId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Panels each ring unlock leads to, ring 1 first.
pub const RING_TARGETS: [&str; 4] = ["p2-text", "interlude", "p4-text", "finale"];

/// Closing message used when a story omits one.
pub const DEFAULT_AFFIRMATION: &str = "❤️ Forever. ❤️";

const BUILTIN_STORY: &str = include_str!("../story/default.yaml");

/// Errors raised while loading story content.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read story: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid story YAML.
    #[error("failed to parse story: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but describes an unplayable story.
    #[error("invalid story: {0}")]
    Invalid(String),
}

/// Interactive surface hosted by a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Paint mixing bowl.
    ColorMix,
    /// Argument sorting board.
    Debate,
    /// Riddles and jigsaw board.
    Jigsaw,
    /// Date prompt.
    Date,
    /// The closing yes button.
    Affirmation,
}

impl PuzzleKind {
    /// Name used in messages; matches the story file spelling.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ColorMix => "color_mix",
            Self::Debate => "debate",
            Self::Jigsaw => "jigsaw",
            Self::Date => "date",
            Self::Affirmation => "affirmation",
        }
    }
}

/// One narrative panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel identifier used as a transition target.
    pub id: PanelId,
    /// Heading.
    pub title: String,
    /// Body text.
    pub text: String,
    /// Where the next button leads, if the panel has one.
    #[serde(default)]
    pub next: Option<PanelId>,
    /// Puzzle hosted on this panel.
    #[serde(default)]
    pub puzzle: Option<PuzzleKind>,
}

/// A complete story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Panels in presentation order.
    pub panels: Vec<PanelConfig>,
    /// Jigsaw riddles, piece 0 first.
    pub riddles: Vec<Riddle>,
    /// Message shown by the closing yes button.
    #[serde(default = "default_affirmation")]
    pub affirmation: String,
}

fn default_affirmation() -> String {
    DEFAULT_AFFIRMATION.to_owned()
}

impl StoryConfig {
    /// The story compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `StoryError` if the embedded document is broken.
    pub fn builtin() -> Result<Self, StoryError> {
        Self::from_yaml_str(BUILTIN_STORY)
    }

    /// Parses and validates a YAML story.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Parse` for malformed YAML and
    /// `StoryError::Invalid` for an unplayable story.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, StoryError> {
        let story: Self = serde_yaml::from_str(yaml)?;
        story.validate()?;
        Ok(story)
    }

    /// Reads, parses and validates a YAML story file.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` if the file cannot be read, otherwise as
    /// [`StoryConfig::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Looks up a panel by id.
    #[must_use]
    pub fn panel(&self, id: &PanelId) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.id == *id)
    }

    /// Panel ids in presentation order.
    #[must_use]
    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id.clone()).collect()
    }

    /// The riddles as a fixed-size board.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Invalid` unless there are exactly four.
    pub fn riddle_board(&self) -> Result<[Riddle; PIECE_COUNT], StoryError> {
        self.riddles.clone().try_into().map_err(|riddles: Vec<Riddle>| {
            StoryError::Invalid(format!(
                "expected {PIECE_COUNT} riddles, found {}",
                riddles.len()
            ))
        })
    }

    fn validate(&self) -> Result<(), StoryError> {
        if self.panels.is_empty() {
            return Err(StoryError::Invalid("story has no panels".to_owned()));
        }

        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.id.as_str()) {
                return Err(StoryError::Invalid(format!(
                    "panel {} is defined twice",
                    panel.id
                )));
            }
        }

        for panel in &self.panels {
            if let Some(next) = panel.next.as_ref().filter(|n| !seen.contains(n.as_str())) {
                return Err(StoryError::Invalid(format!(
                    "panel {} leads to unknown panel {next}",
                    panel.id
                )));
            }
        }

        for target in RING_TARGETS {
            if !seen.contains(target) {
                return Err(StoryError::Invalid(format!(
                    "ring target panel {target} is missing"
                )));
            }
        }

        self.riddle_board().map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r"
panels:
  - { id: start, title: Start, text: hi, next: p2-text }
  - { id: p2-text, title: Two, text: two }
  - { id: interlude, title: Mid, text: mid }
  - { id: p4-text, title: Four, text: four }
  - { id: finale, title: End, text: end, puzzle: affirmation }
riddles:
  - { prompt: a, answer: one }
  - { prompt: b, answer: two }
  - { prompt: c, answer: three }
  - { prompt: d, answer: four }
";

    #[test]
    fn test_builtin_story_is_valid() {
        // Act
        let story = StoryConfig::builtin().unwrap();

        // Assert
        assert_eq!(story.panels[0].id.as_str(), "intro");
        assert_eq!(story.affirmation, DEFAULT_AFFIRMATION);
        assert_eq!(story.riddles.len(), PIECE_COUNT);
        for kind in [
            PuzzleKind::ColorMix,
            PuzzleKind::Debate,
            PuzzleKind::Jigsaw,
            PuzzleKind::Date,
            PuzzleKind::Affirmation,
        ] {
            assert!(
                story.panels.iter().any(|p| p.puzzle == Some(kind)),
                "no panel hosts {kind:?}"
            );
        }
    }

    #[test]
    fn test_minimal_story_gets_default_affirmation() {
        let story = StoryConfig::from_yaml_str(MINIMAL).unwrap();

        assert_eq!(story.affirmation, DEFAULT_AFFIRMATION);
        assert_eq!(story.panel(&PanelId::from("start")).unwrap().title, "Start");
    }

    #[test]
    fn test_duplicate_panel_is_invalid() {
        let yaml = MINIMAL.replace("id: interlude", "id: p2-text");

        let result = StoryConfig::from_yaml_str(&yaml);

        assert!(matches!(result, Err(StoryError::Invalid(_))));
    }

    #[test]
    fn test_missing_ring_target_is_invalid() {
        let yaml = MINIMAL.replace("id: finale", "id: the-end");

        let result = StoryConfig::from_yaml_str(&yaml);

        assert!(matches!(result, Err(StoryError::Invalid(msg)) if msg.contains("finale")));
    }

    #[test]
    fn test_dangling_next_is_invalid() {
        let yaml = MINIMAL.replace("next: p2-text", "next: nowhere");

        let result = StoryConfig::from_yaml_str(&yaml);

        assert!(matches!(result, Err(StoryError::Invalid(msg)) if msg.contains("nowhere")));
    }

    #[test]
    fn test_wrong_riddle_count_is_invalid() {
        let yaml = MINIMAL.replace("  - { prompt: d, answer: four }\n", "");

        let result = StoryConfig::from_yaml_str(&yaml);

        assert!(matches!(result, Err(StoryError::Invalid(msg)) if msg.contains("riddles")));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let result = StoryConfig::from_yaml_str("panels: [");

        assert!(matches!(result, Err(StoryError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = StoryConfig::load(Path::new("/nonexistent/ringlock/story.yaml"));

        assert!(matches!(result, Err(StoryError::Io(_))));
    }
}
