// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The value that used to be reported in place of a palette index when a color could
/// not be parsed. It is one past the last valid index (`255`), so it can't be mistaken
/// for a color, and it is only reachable through [`ColorParseError::unmapped_index()`].
pub const UNMAPPED_INDEX: u16 = 256;

/// Why a hex color string was rejected. The offending input is always included so
/// the message is actionable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorParseError {
    #[error("Invalid color '{input}': expected 3 or 6 hex digits, found {length}")]
    #[diagnostic(
        code(hexterm::color::invalid_length),
        help("Use a hex color like `f00`, `ff8000`, or `#e0e0e0`")
    )]
    InvalidLength { input: String, length: usize },

    #[error("Invalid color '{input}': '{character}' is not a hex digit")]
    #[diagnostic(
        code(hexterm::color::invalid_character),
        help("Only 0-9, a-f, and A-F are allowed, with an optional leading `#`")
    )]
    InvalidCharacter { input: String, character: char },
}

impl ColorParseError {
    /// Work out which rule `input` breaks. Length (after stripping one leading `#`)
    /// is checked before the characters.
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let length = digits.chars().count();

        if length != 3 && length != 6 {
            return ColorParseError::InvalidLength {
                input: input.to_string(),
                length,
            };
        }

        // Only input the parser rejected gets here, so the right length means a
        // non hex character is present.
        let character = digits
            .chars()
            .find(|it| !it.is_ascii_hexdigit())
            .unwrap_or('#');
        ColorParseError::InvalidCharacter {
            input: input.to_string(),
            character,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            ColorParseError::InvalidLength { input, .. }
            | ColorParseError::InvalidCharacter { input, .. } => input,
        }
    }

    /// Always [`UNMAPPED_INDEX`]. This is not a palette index and must not be used
    /// as one; it only exists for callers that need to print a placeholder number.
    #[must_use]
    pub fn unmapped_index(&self) -> u16 { UNMAPPED_INDEX }
}
