//! RGB color values for text and background attributes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color, 8 bits per channel.
///
/// Colors compare equal only when all channels match exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unit-interval channel values (`0.0..=1.0`),
    /// rounding each channel to the nearest 8-bit integer.
    ///
    /// Out-of-range inputs are clamped before rounding, so a color space
    /// conversion that overshoots slightly still yields a valid channel.
    #[must_use]
    pub fn from_components(r: f64, g: f64, b: f64) -> Self {
        fn channel(value: f64) -> u8 {
            let scaled = (value.clamp(0.0, 1.0) * 255.0).round();
            // Clamped to 0.0..=255.0 above, so the cast cannot truncate or lose sign.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                scaled as u8
            }
        }
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for RgbColor {
    /// Formats as `#RRGGBB` with uppercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{0}', expected #RRGGBB")]
pub struct ParseColorError(String);

impl FromStr for RgbColor {
    type Err = ParseColorError;

    /// Parses `#RRGGBB` (the leading `#` is optional), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        if hex.len() != 6 {
            return Err(ParseColorError(s.to_string()));
        }
        if let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
            Ok(Self::new(r, g, b))
        } else {
            Err(ParseColorError(s.to_string()))
        }
    }
}
