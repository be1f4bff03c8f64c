// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Map an RGB color onto one of the three subspaces of the 256-color palette.
//!
//! The subspaces are tried in strict precedence order:
//!
//! 1. An exact match in the 16 primary colors table (indices 0-15).
//! 2. The greyscale ramp (indices 231-255) when all three channels are equal.
//! 3. The 6x6x6 RGB cube (indices 16-231) for everything else.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use strum_macros::Display;

use super::{AnsiValue, ColorParseError, RgbColor};

/// Which part of the palette a color was mapped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ColorSpace {
    #[strum(serialize = "ansi16")]
    Ansi16,
    #[strum(serialize = "grey")]
    Greyscale,
    #[strum(serialize = "rgb216")]
    RgbCube,
}

/// The outcome of mapping one color: what was parsed, where it landed, and the path
/// that put it there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappedColor {
    pub rgb: RgbColor,
    pub ansi: AnsiValue,
    pub color_space: ColorSpace,
}

pub mod ansi_constants {
    use crate::RgbColor;

    /// The 16 primary colors, keyed by the normalized 6 digit hex. Several keys may
    /// map to one index: the bright entries accept both the `f0` spelling (which is
    /// what a 3 digit code like `f00` expands to) and the `ff` spelling. Only the
    /// entries listed here have two spellings.
    #[rustfmt::skip]
    pub const PRIMARY_COLORS: [(&[u32], u8); 16] = [
        (&[0x00_00_00],              0),
        (&[0xd0_00_00],              1),
        (&[0x00_d0_00],              2),
        (&[0xd0_d0_00],              3),
        (&[0x00_00_f0, 0x00_00_ff],  4),
        (&[0xd0_00_d0],              5),
        (&[0x00_d0_d0],              6),
        (&[0xe0_e0_e0],              7),
        (&[0x80_80_80],              8),
        (&[0xf0_00_00, 0xff_00_00],  9),
        (&[0x00_f0_00, 0x00_ff_00], 10),
        (&[0xf0_f0_00, 0xff_ff_00], 11),
        (&[0x50_50_f0, 0x50_50_ff], 12),
        (&[0xf0_00_f0, 0xff_00_ff], 13),
        (&[0x00_f0_f0, 0x00_ff_ff], 14),
        (&[0xf0_f0_f0, 0xff_ff_ff], 15),
    ];

    /// What a stock xterm displays for indices 0-15.
    #[rustfmt::skip]
    pub const ANSI16_XTERM_PALETTE: [RgbColor; 16] = [
        RgbColor::from_u8(0, 0, 0),       RgbColor::from_u8(128, 0, 0),
        RgbColor::from_u8(0, 128, 0),     RgbColor::from_u8(128, 128, 0),
        RgbColor::from_u8(0, 0, 128),     RgbColor::from_u8(128, 0, 128),
        RgbColor::from_u8(0, 128, 128),   RgbColor::from_u8(192, 192, 192),
        RgbColor::from_u8(128, 128, 128), RgbColor::from_u8(255, 0, 0),
        RgbColor::from_u8(0, 255, 0),     RgbColor::from_u8(255, 255, 0),
        RgbColor::from_u8(0, 0, 255),     RgbColor::from_u8(255, 0, 255),
        RgbColor::from_u8(0, 255, 255),   RgbColor::from_u8(255, 255, 255),
    ];

    pub const GREYSCALE_BASE_INDEX: u16 = 231;
    pub const GREYSCALE_STEPS: u16 = 25;
    pub const RGB_CUBE_BASE_INDEX: u16 = 16;
    pub const RGB_CUBE_SIDE: u16 = 6;
}

use ansi_constants::{GREYSCALE_BASE_INDEX,
                     GREYSCALE_STEPS,
                     PRIMARY_COLORS,
                     RGB_CUBE_BASE_INDEX,
                     RGB_CUBE_SIDE};

/// Parse `hex` and map it to a palette index.
///
/// ```
/// use hexterm_ansi_color::{AnsiValue, map_hex_color};
///
/// assert_eq!(map_hex_color("ff8000").unwrap(), AnsiValue::new(214));
/// assert_eq!(map_hex_color("#FFF").unwrap(), AnsiValue::new(15));
/// assert!(map_hex_color("zz0000").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ColorParseError`] for malformed input. A default color is never
/// substituted.
pub fn map_hex_color(hex: &str) -> Result<AnsiValue, ColorParseError> {
    classify_hex_color(hex).map(|it| it.ansi)
}

/// Same as [`map_hex_color()`] but also reports the parsed channels and which
/// subspace was used.
///
/// # Errors
///
/// Returns a [`ColorParseError`] for malformed input.
pub fn classify_hex_color(hex: &str) -> Result<MappedColor, ColorParseError> {
    let rgb: RgbColor = hex.parse()?;
    let mapped = classify_rgb(rgb);
    // % is Display, ? is Debug.
    tracing::trace!(
        message = "Mapped hex color",
        hex = %hex,
        index = mapped.ansi.index,
        color_space = %mapped.color_space
    );
    Ok(mapped)
}

#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbColor) -> AnsiValue { classify_rgb(rgb).ansi }

#[must_use]
pub fn classify_rgb(rgb: RgbColor) -> MappedColor {
    let (ansi, color_space) = if let Some(index) = find_primary_color(rgb) {
        (index, ColorSpace::Ansi16)
    } else if rgb.is_grey() {
        (convert_grey_into_ansi256(rgb.red), ColorSpace::Greyscale)
    } else {
        (convert_rgb_into_cube(rgb), ColorSpace::RgbCube)
    };
    MappedColor {
        rgb,
        ansi,
        color_space,
    }
}

fn find_primary_color(rgb: RgbColor) -> Option<AnsiValue> {
    let key = rgb.as_hex_u32();
    PRIMARY_COLORS
        .iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, index)| AnsiValue::new(*index))
}

/// `r * 25 / 256 + 231`, which is 255 for `r = 255`.
fn convert_grey_into_ansi256(level: u8) -> AnsiValue {
    let index = u16::from(level) * GREYSCALE_STEPS / 256 + GREYSCALE_BASE_INDEX;
    AnsiValue::from(index)
}

fn convert_rgb_into_cube(rgb: RgbColor) -> AnsiValue {
    let downsample = |channel: u8| u16::from(channel) * RGB_CUBE_SIDE / 256;
    let index = RGB_CUBE_BASE_INDEX
        + RGB_CUBE_SIDE * RGB_CUBE_SIDE * downsample(rgb.red)
        + RGB_CUBE_SIDE * downsample(rgb.green)
        + downsample(rgb.blue);
    AnsiValue::from(index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("000000", 0)]
    #[test_case("d00000", 1)]
    #[test_case("00d000", 2)]
    #[test_case("d0d000", 3)]
    #[test_case("0000f0", 4)]
    #[test_case("0000ff", 4)]
    #[test_case("d000d0", 5)]
    #[test_case("00d0d0", 6)]
    #[test_case("e0e0e0", 7)]
    #[test_case("808080", 8)]
    #[test_case("f00000", 9)]
    #[test_case("ff0000", 9)]
    #[test_case("00f000", 10)]
    #[test_case("00ff00", 10)]
    #[test_case("f0f000", 11)]
    #[test_case("ffff00", 11)]
    #[test_case("5050f0", 12)]
    #[test_case("5050ff", 12)]
    #[test_case("f000f0", 13)]
    #[test_case("ff00ff", 13)]
    #[test_case("00f0f0", 14)]
    #[test_case("00ffff", 14)]
    #[test_case("f0f0f0", 15)]
    #[test_case("ffffff", 15)]
    fn test_primary_colors(hex: &str, index: u8) {
        let mapped = classify_hex_color(hex).unwrap();
        assert_eq!(mapped.ansi, AnsiValue::new(index));
        assert_eq!(mapped.color_space, ColorSpace::Ansi16);
    }

    /// Only the listed spellings are primaries, `d0` has no `df` twin.
    #[test]
    fn test_dual_spelling_is_not_generic() {
        let mapped = classify_hex_color("df0000").unwrap();
        assert_eq!(mapped.color_space, ColorSpace::RgbCube);
    }

    /// Black and white satisfy `r == g == b` too, but the table wins.
    #[test]
    fn test_primary_takes_precedence_over_greyscale() {
        assert_eq!(classify_hex_color("000000").unwrap().color_space, ColorSpace::Ansi16);
        assert_eq!(classify_hex_color("ffffff").unwrap().color_space, ColorSpace::Ansi16);
        assert_eq!(map_hex_color("ffffff").unwrap(), AnsiValue::new(15));
    }

    #[test_case("010101", 231)]
    #[test_case("0a0a0a", 231)]
    #[test_case("111111", 232)]
    #[test_case("7f7f7f", 243)]
    #[test_case("fefefe", 255)]
    fn test_greyscale(hex: &str, index: u8) {
        let mapped = classify_hex_color(hex).unwrap();
        assert_eq!(mapped.ansi, AnsiValue::new(index));
        assert_eq!(mapped.color_space, ColorSpace::Greyscale);
    }

    /// `ffffff` never reaches the greyscale path, so check the arithmetic directly.
    #[test]
    fn test_greyscale_top_boundary() {
        assert_eq!(convert_grey_into_ansi256(255), AnsiValue::new(255));
        assert_eq!(convert_grey_into_ansi256(0), AnsiValue::new(231));
    }

    #[test_case("ff8000", 214)]
    #[test_case("010000", 16)]
    #[test_case("70f", 93)]
    #[test_case("7000f0", 93)]
    #[test_case("fffeff", 231)]
    #[test_case("2a80d4", 38)]
    fn test_rgb_cube(hex: &str, index: u8) {
        let mapped = classify_hex_color(hex).unwrap();
        assert_eq!(mapped.ansi, AnsiValue::new(index));
        assert_eq!(mapped.color_space, ColorSpace::RgbCube);
    }

    #[test]
    fn test_cube_stays_in_range() {
        for red in (0..=255_u8).step_by(15) {
            for green in (0..=255_u8).step_by(17) {
                let rgb = RgbColor::from_u8(red, green, 255 - red);
                let mapped = classify_rgb(rgb);
                if mapped.color_space == ColorSpace::RgbCube {
                    assert!((16..=231).contains(&mapped.ansi.index), "{rgb}");
                }
            }
        }
    }

    #[test]
    fn test_three_digit_expands_with_trailing_zero() {
        assert_eq!(
            classify_hex_color("70f").unwrap().rgb,
            RgbColor::from_u8(0x70, 0x00, 0xf0)
        );
        assert_eq!(map_hex_color("70f"), map_hex_color("7000f0"));
        assert_eq!(map_hex_color("888").unwrap(), AnsiValue::new(8));
        assert_eq!(map_hex_color("888888").unwrap(), AnsiValue::new(244));
        assert_eq!(map_hex_color("f00").unwrap(), AnsiValue::new(9));
    }

    #[test]
    fn test_every_three_digit_code_maps_like_its_expansion() {
        const DIGITS: &[u8] = b"0123456789abcdef";
        for &r in DIGITS {
            for &g in DIGITS {
                for &b in DIGITS {
                    let short = String::from_utf8(vec![r, g, b]).unwrap();
                    let long = String::from_utf8(vec![r, b'0', g, b'0', b, b'0']).unwrap();
                    assert_eq!(
                        map_hex_color(&short).unwrap(),
                        map_hex_color(&long).unwrap(),
                        "{short} vs {long}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(map_hex_color("FF0000"), map_hex_color("ff0000"));
        assert_eq!(map_hex_color("#Ff8000"), map_hex_color("ff8000"));
    }

    #[test]
    fn test_mapping_is_repeatable() {
        let first = classify_hex_color("2a80d4").unwrap();
        let second = classify_hex_color("2a80d4").unwrap();
        assert_eq!(first, second);
    }

    #[test_case("zz0000")]
    #[test_case("12")]
    #[test_case("1234567")]
    #[test_case("")]
    #[test_case("#")]
    #[test_case("ff 000")]
    fn test_malformed_input_is_an_error(hex: &str) {
        let result = map_hex_color(hex);
        assert!(result.is_err(), "{hex} should not map to {result:?}");
    }

    #[test]
    fn test_color_space_display() {
        assert_eq!(ColorSpace::Ansi16.to_string(), "ansi16");
        assert_eq!(ColorSpace::Greyscale.to_string(), "grey");
        assert_eq!(ColorSpace::RgbCube.to_string(), "rgb216");
    }
}
