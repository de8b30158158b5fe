use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// An RGBA color with `f32` channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_packed(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        let channel = |v: u8| f32::from(v) / 255.0;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Parses an opaque color from `#rrggbb` notation.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidHex`] if `hex` is not a `#` followed by
    /// six hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let invalid = || PaletteError::InvalidHex(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::from_packed(packed))
    }

    /// Formats the color channels as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(&self) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Returns the channels as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
