use std::{fmt, str::FromStr};

use crate::foundation::error::{LookbookError, LookbookResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    /// Frame rate every slideshow is rendered at.
    pub const SLIDESHOW: Fps = Fps { num: 30, den: 1 };

    pub fn new(num: u32, den: u32) -> LookbookResult<Self> {
        if den == 0 {
            return Err(LookbookError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LookbookError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which image axis is matched to the canvas before the other one follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Height,
    Width,
}

impl FromStr for FitMode {
    type Err = LookbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "height" => Ok(Self::Height),
            "width" => Ok(Self::Width),
            other => Err(LookbookError::validation(format!(
                "unknown fit mode \"{other}\" (expected \"height\" or \"width\")"
            ))),
        }
    }
}

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(s: &str) -> LookbookResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(LookbookError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        let hex_byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| LookbookError::validation(format!("invalid hex byte \"{pair}\"")))
        };

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
