use serde::{Deserialize, Serialize};

use crate::error::{HeartCloudError, Result};

/// Linear-interpolatable RGB colour with channels in [0, 1].
///
/// Deserialises from either a `"#rrggbb"` string or an `[r, g, b]` array, and
/// always serialises as an array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColourValue", into = "[f32; 3]")]
pub struct ParticleColour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Accepted serialised forms of a [`ParticleColour`].
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Hex(String),
    Channels([f32; 3]),
}

impl ParticleColour {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional). Channels are `byte / 255`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(HeartCloudError::invalid(format!(
                "colour '{hex}' is not of the form #rrggbb"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| byte as f32 / 255.0)
                .map_err(|_| HeartCloudError::invalid(format!("colour '{hex}' is not valid hex")))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |c: f32| (0.0..=1.0).contains(&c);
        if in_range(self.r) && in_range(self.g) && in_range(self.b) {
            Ok(())
        } else {
            Err(HeartCloudError::invalid(format!(
                "colour channels must lie in [0, 1], got ({}, {}, {})",
                self.r, self.g, self.b
            )))
        }
    }

    /// `self + (other - self) * t`, clamped to [0, 1].
    ///
    /// Written in this form so that a channel shared by both endpoints comes out
    /// exactly equal to it for any `t`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| (a + (b - a) * t).clamp(0.0, 1.0);
        Self::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl TryFrom<ColourValue> for ParticleColour {
    type Error = HeartCloudError;

    fn try_from(value: ColourValue) -> Result<Self> {
        let colour = match value {
            ColourValue::Hex(hex) => Self::from_hex(&hex)?,
            ColourValue::Channels([r, g, b]) => Self::rgb(r, g, b),
        };
        colour.validate()?;
        Ok(colour)
    }
}

impl From<ParticleColour> for [f32; 3] {
    fn from(colour: ParticleColour) -> Self {
        colour.to_array()
    }
}
