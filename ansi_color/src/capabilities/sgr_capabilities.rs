// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CapabilityError, TerminalCapabilities};
use crate::{AnsiValue, Attribute, ColorSupport, SgrCode, global_color_support};

/// Builds standard SGR sequences without consulting any database. The sequences are
/// what an `xterm-256color` terminfo entry would return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCapabilities {
    pub color_support: ColorSupport,
}

impl SgrCapabilities {
    #[must_use]
    pub fn new(color_support: ColorSupport) -> Self { Self { color_support } }

    /// Use the process wide color support, see [`global_color_support::detect`].
    #[must_use]
    pub fn detect() -> Self { Self::new(global_color_support::detect()) }

    fn emit(&self, sgr_code: SgrCode) -> Result<String, CapabilityError> {
        match self.color_support {
            ColorSupport::NoColor => Err(CapabilityError::NoColors),
            ColorSupport::Ansi256 | ColorSupport::Ansi8 => Ok(sgr_code.to_string()),
        }
    }

    /// An 8 color terminal gets `3N`/`4N`, and only for the indices it has, the way
    /// terminfo's `setaf`/`setab` behave for `xterm`.
    fn emit_color(
        &self,
        capability: &str,
        color: AnsiValue,
        ansi8: fn(u8) -> SgrCode,
        ansi256: fn(u8) -> SgrCode,
    ) -> Result<String, CapabilityError> {
        let index = color.index;
        match self.color_support {
            ColorSupport::NoColor => Err(CapabilityError::NoColors),
            ColorSupport::Ansi256 => Ok(ansi256(index).to_string()),
            ColorSupport::Ansi8 if index < 8 => Ok(ansi8(index).to_string()),
            ColorSupport::Ansi8 => Err(CapabilityError::LookupFailed {
                capability: capability.to_string(),
                message: format!("color {index} is outside the 8 color palette"),
            }),
        }
    }
}

impl TerminalCapabilities for SgrCapabilities {
    fn color_count(&self) -> Result<u32, CapabilityError> {
        match self.color_support.color_count() {
            0 => Err(CapabilityError::NoColors),
            it => Ok(it),
        }
    }

    fn set_foreground(&self, color: AnsiValue) -> Result<String, CapabilityError> {
        self.emit_color(
            "setaf",
            color,
            SgrCode::ForegroundAnsi8,
            SgrCode::ForegroundAnsi256,
        )
    }

    fn set_background(&self, color: AnsiValue) -> Result<String, CapabilityError> {
        self.emit_color(
            "setab",
            color,
            SgrCode::BackgroundAnsi8,
            SgrCode::BackgroundAnsi256,
        )
    }

    fn attribute(&self, attribute: Attribute) -> Result<String, CapabilityError> {
        self.emit(attribute.sgr_code())
    }

    fn reset(&self) -> Result<String, CapabilityError> { self.emit(SgrCode::Reset) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(Attribute::Bold, "\x1b[1m")]
    #[test_case(Attribute::Underline, "\x1b[4m")]
    #[test_case(Attribute::Reverse, "\x1b[7m")]
    #[test_case(Attribute::Blink, "\x1b[5m")]
    #[test_case(Attribute::Invisible, "\x1b[8m")]
    #[test_case(Attribute::Standout, "\x1b[7m")]
    fn test_attribute_sequences(attribute: Attribute, expected: &str) {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        assert_eq!(caps.attribute(attribute).unwrap(), expected);
    }

    #[test]
    fn test_color_sequences() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        assert_eq!(caps.set_foreground(AnsiValue::new(214)).unwrap(), "\x1b[38;5;214m");
        assert_eq!(caps.set_background(AnsiValue::new(0)).unwrap(), "\x1b[48;5;0m");
        assert_eq!(caps.reset().unwrap(), "\x1b[0m");
    }

    #[test]
    fn test_eight_color_sequences() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi8);
        assert_eq!(caps.set_foreground(AnsiValue::new(1)).unwrap(), "\x1b[31m");
        assert_eq!(caps.set_background(AnsiValue::new(7)).unwrap(), "\x1b[47m");
        assert_eq!(caps.attribute(Attribute::Bold).unwrap(), "\x1b[1m");
        assert_eq!(caps.reset().unwrap(), "\x1b[0m");
    }

    #[test]
    fn test_eight_colors_refuse_larger_indices() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi8);
        assert!(matches!(
            caps.set_foreground(AnsiValue::new(8)),
            Err(CapabilityError::LookupFailed { ref capability, .. }) if capability == "setaf"
        ));
        assert!(matches!(
            caps.set_background(AnsiValue::new(214)),
            Err(CapabilityError::LookupFailed { ref capability, .. }) if capability == "setab"
        ));
    }

    #[test_case(ColorSupport::Ansi256, Ok(256))]
    #[test_case(ColorSupport::Ansi8, Ok(8))]
    #[test_case(ColorSupport::NoColor, Err(CapabilityError::NoColors))]
    fn test_color_count(color_support: ColorSupport, expected: Result<u32, CapabilityError>) {
        assert_eq!(SgrCapabilities::new(color_support).color_count(), expected);
    }

    #[test]
    fn test_no_color_refuses_sequences() {
        let caps = SgrCapabilities::new(ColorSupport::NoColor);
        assert_eq!(
            caps.set_foreground(AnsiValue::new(9)),
            Err(CapabilityError::NoColors)
        );
        assert_eq!(caps.reset(), Err(CapabilityError::NoColors));
    }
}
