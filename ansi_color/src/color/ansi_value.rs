// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette index.
//!
//! Each index (0-255) maps to a specific color in the xterm palette. An index is a
//! [`u8`], so an out of range value (like the legacy "unmapped" 256) can't be stored
//! in this type.

use super::{RgbColor, convert::ansi_constants::ANSI16_XTERM_PALETTE};
use crate::TransformColor;

#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<u16> for AnsiValue {
    fn from(value: u16) -> Self {
        debug_assert!(
            value <= 255,
            "AnsiValue must represent a valid 256-color palette index (0-255), got {value}"
        );
        #[allow(clippy::cast_possible_truncation)]
        let index = value as u8;
        Self { index }
    }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

impl TransformColor for AnsiValue {
    /// The color the stock xterm palette shows for this index.
    fn as_rgb(&self) -> RgbColor {
        const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
        match self.index {
            index @ 0..=15 => ANSI16_XTERM_PALETTE[usize::from(index)],
            index @ 16..=231 => {
                let offset = index - 16;
                RgbColor::from_u8(
                    CUBE_LEVELS[usize::from(offset / 36)],
                    CUBE_LEVELS[usize::from((offset % 36) / 6)],
                    CUBE_LEVELS[usize::from(offset % 6)],
                )
            }
            index => {
                let level = 8 + (index - 232) * 10;
                RgbColor::from_u8(level, level, level)
            }
        }
    }

    fn as_ansi(&self) -> AnsiValue { *self }
}
