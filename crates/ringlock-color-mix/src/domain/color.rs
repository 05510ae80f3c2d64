//! Color samples, averaging, and the target predicate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGB triple with channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSample {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl ColorSample {
    /// Builds a sample from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The pink the bowl must reach: strongly red, moderate and balanced
    /// green and blue.
    #[must_use]
    pub fn is_target_pink(self) -> bool {
        let red_dominant = self.red > 200;
        let green_moderate = self.green > 100 && self.green < 180;
        let blue_moderate = self.blue > 100 && self.blue < 180;
        let balanced = self.green.abs_diff(self.blue) < 30;

        red_dominant && green_moderate && blue_moderate && balanced
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Why a drag payload is not a color.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The payload does not have exactly three comma-separated parts.
    #[error("expected three comma-separated channels, got {0}")]
    ChannelCount(usize),

    /// A channel is not an integer in 0..=255.
    #[error("channel {0:?} is not an integer in 0..=255")]
    Channel(String),
}

impl FromStr for ColorSample {
    type Err = ColorParseError;

    /// Parses the `"r,g,b"` payload carried by a dragged paint blob.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ChannelCount(parts.len()));
        }
        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| ColorParseError::Channel(p.to_owned()))
        };
        Ok(Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
    }
}

/// Averages the whole history, rounding each channel half up. Always
/// recomputed from every sample; `None` for an empty mix.
#[must_use]
pub fn mean_color(samples: &[ColorSample]) -> Option<ColorSample> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as u64;
    let (r, g, b) = samples.iter().fold((0u64, 0u64, 0u64), |(r, g, b), s| {
        (
            r + u64::from(s.red),
            g + u64::from(s.green),
            b + u64::from(s.blue),
        )
    });
    // Half-up rounding of sum / n, kept in integers.
    let round = |sum: u64| u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(u8::MAX);
    Some(ColorSample::new(round(r), round(g), round(b)))
}
