// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit) color, as written by the user in hex.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use super::{AnsiValue, ColorParseError, convert::convert_rgb_into_ansi256};
use crate::{TransformColor, hex_color_parser::parse_hex_color};

/// A color with three 8-bit channels. Once constructed every channel is a valid
/// `0..=255` value, so this type never needs re-validation.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbColor {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a 3 or 6 digit hex color, with an optional leading `#`. Hex digits are
    /// case-insensitive.
    ///
    /// A 3 digit code expands every digit `d` into the byte `d0`, so `70f` is
    /// `(0x70, 0x00, 0xf0)` and not `(0x77, 0x00, 0xff)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidLength`] when there aren't exactly 3 or 6
    /// characters after the optional `#`, and [`ColorParseError::InvalidCharacter`]
    /// when one of them is not a hex digit.
    pub fn try_from_hex_color(input: &str) -> Result<RgbColor, ColorParseError> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ColorParseError::classify(input)),
        }
    }

    /// The normalized 6 digit hex form packed into an integer, eg: `0x00_00_f0`.
    #[must_use]
    pub fn as_hex_u32(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }

    #[must_use]
    pub fn is_grey(&self) -> bool { self.red == self.green && self.green == self.blue }
}

impl FromStr for RgbColor {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> { Self::try_from_hex_color(input) }
}

/// Lowercase `#rrggbb`.
impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.as_hex_u32())
    }
}

impl TransformColor for RgbColor {
    fn as_rgb(&self) -> RgbColor { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }
}
