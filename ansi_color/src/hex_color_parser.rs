// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbColor`]
//! struct. The hex color string can be in the following formats, each with an optional
//! leading `#`:
//! - `RRGGBB`, eg: `FF0000` for red.
//! - `RGB`, eg: `F00`, where each digit `d` becomes the byte `d0`. So `F00` is
//!   `F00000`, not `FF0000`.

use nom::{IResult,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt},
          sequence::tuple};

use crate::RgbColor;

/// Parse function that generates an [`RgbColor`] struct from a valid hex color string.
/// The whole input must be consumed.
///
/// # Errors
///
/// Returns a [`nom`] error when the input isn't 3 or 6 hex digits. Use
/// [`crate::ColorParseError::classify`] to turn that into something readable.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = opt(tag("#"))(input)?;
    all_consuming(alt((
        intermediate_parsers::parse_six_digit_color,
        intermediate_parsers::parse_three_digit_color,
    )))(input)
}

/// Helper functions to match and parse hex digits. These are not [`nom::Parser`]
/// implementations.
mod helper_fns {
    /// This function is used by [`nom::combinator::map_res`] and it returns a
    /// [Result], not [`nom::IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// A single digit `d` stands for the byte `d0`.
    pub fn parse_digit_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16).map(|it| it << 4)
    }

    /// This function is used by [`nom::bytes::complete::take_while_m_n`] and as long
    /// as it returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }
}

/// These are the segment and color parsers used by [`parse_hex_color`].
mod intermediate_parsers {
    use super::{IResult, RgbColor, helper_fns, map_res, take_while_m_n, tuple};

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, helper_fns::match_is_hex_digit),
            helper_fns::parse_str_to_hex_num,
        )(input)
    }

    pub fn parse_short_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(1, 1, helper_fns::match_is_hex_digit),
            helper_fns::parse_digit_to_hex_num,
        )(input)
    }

    pub fn parse_six_digit_color(input: &str) -> IResult<&str, RgbColor> {
        let (input, (red, green, blue)) =
            tuple((parse_hex_seg, parse_hex_seg, parse_hex_seg))(input)?;
        Ok((input, RgbColor { red, green, blue }))
    }

    pub fn parse_three_digit_color(input: &str) -> IResult<&str, RgbColor> {
        let (input, (red, green, blue)) =
            tuple((parse_short_hex_seg, parse_short_hex_seg, parse_short_hex_seg))(
                input,
            )?;
        Ok((input, RgbColor { red, green, blue }))
    }
}
