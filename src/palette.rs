//! Colours used by the board renderer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::IntoStorage;
use serde::{Deserialize, Serialize};

/// A packed 16-bit RGB565 colour, the panel's native pixel format.
///
/// Serialized as the raw integer so config files can use the same numbers
/// the panel datasheets and drivers print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color565(u16);

impl Color565 {
    /// All channels off.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// All channels full.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Green + blue.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Red + blue.
    pub const PURPLE: Self = Self::rgb(255, 0, 255);

    /// Wraps an already packed value.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Packs 8-bit channels, dropping the low bits (5-6-5).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// The packed value.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<Color565> for Rgb565 {
    fn from(color: Color565) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

impl From<Rgb565> for Color565 {
    fn from(color: Rgb565) -> Self {
        Self(color.into_storage())
    }
}

/// Colours for every element the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Grid lines.
    pub grid: Color565,
    /// X marks.
    pub x_mark: Color565,
    /// O marks.
    pub o_mark: Color565,
    /// Status line text (title, end-of-game message).
    pub text: Color565,
    /// Status line background.
    pub banner: Color565,
    /// Touch coordinate readout.
    pub readout: Color565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color565::from_raw(31404),
            x_mark: Color565::CYAN,
            o_mark: Color565::from_raw(22222),
            text: Color565::WHITE,
            banner: Color565::PURPLE,
            readout: Color565::CYAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn test_rgb_packing() {
        assert_eq!(Color565::WHITE.raw(), 0xFFFF);
        assert_eq!(Color565::BLACK.raw(), 0x0000);
        assert_eq!(Color565::CYAN.raw(), 0x07FF);
        assert_eq!(Color565::PURPLE.raw(), 0xF81F);
    }

    #[test]
    fn test_matches_embedded_graphics() {
        assert_eq!(Rgb565::from(Color565::CYAN), Rgb565::CYAN);
        assert_eq!(Color565::from(Rgb565::MAGENTA), Color565::PURPLE);
    }
}
