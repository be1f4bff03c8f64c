// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Show what the terminal does with the palette: every index in its own color
//! ([`probe_palette`]), or a single hex color as foreground and background
//! ([`render_code_sample`]).

use std::io::Write;

use crate::{AnsiValue, MappedColor, RenderError, TerminalCapabilities,
            classify_hex_color};

/// The largest palette the probe walks.
pub const MAX_PROBE_COLORS: u32 = 256;

/// Each index is printed right aligned in this many columns.
const CELL_WIDTH: usize = 4;

/// Every palette index from `0` up to the terminal's color count (capped at
/// [`MAX_PROBE_COLORS`]), each printed in its own foreground color, followed by a
/// reset and a newline.
///
/// # Errors
///
/// [`RenderError::Capability`] when the terminal has no colors or a sequence can't be
/// looked up.
pub fn format_palette_probe(caps: &dyn TerminalCapabilities) -> Result<String, RenderError> {
    let count = caps.color_count()?.min(MAX_PROBE_COLORS);
    let mut acc = String::new();

    for index in 0..count {
        let Ok(index) = u8::try_from(index) else {
            break;
        };
        acc.push_str(&caps.set_foreground(AnsiValue::new(index))?);
        acc.push_str(&format!("{index:>CELL_WIDTH$}"));
    }

    acc.push_str(&caps.reset()?);
    acc.push('\n');

    tracing::debug!(message = "Palette probe", count = count);
    Ok(acc)
}

/// [`format_palette_probe`] written to `writer`.
///
/// # Errors
///
/// Same as [`format_palette_probe`], plus [`RenderError::Io`] if the write fails.
pub fn probe_palette(
    caps: &dyn TerminalCapabilities,
    writer: &mut impl Write,
) -> Result<(), RenderError> {
    let it = format_palette_probe(caps)?;
    writer.write_all(it.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// One hex color shown twice: its index in that color as foreground, then as
/// background, each followed by a reset.
///
/// ```
/// use hexterm_ansi_color::{ColorSupport, SgrCapabilities, format_code_sample};
///
/// let caps = SgrCapabilities::new(ColorSupport::Ansi256);
/// let (_, sample) = format_code_sample("70f", &caps).unwrap();
/// assert_eq!(sample, "\x1b[38;5;93m  93\x1b[0m \x1b[48;5;93m  93\x1b[0m\n");
/// ```
///
/// # Errors
///
/// - [`RenderError::Parse`] when `hex` is malformed.
/// - [`RenderError::Capability`] when a sequence can't be looked up.
pub fn format_code_sample(
    hex: &str,
    caps: &dyn TerminalCapabilities,
) -> Result<(MappedColor, String), RenderError> {
    let mapped = classify_hex_color(hex)?;
    let index = mapped.ansi.index;

    let fg = caps.set_foreground(mapped.ansi)?;
    let bg = caps.set_background(mapped.ansi)?;
    let reset = caps.reset()?;

    let it = format!(
        "{fg}{index:>CELL_WIDTH$}{reset} {bg}{index:>CELL_WIDTH$}{reset}\n"
    );
    Ok((mapped, it))
}

/// [`format_code_sample`] written to `writer`. Returns how the color was mapped.
///
/// # Errors
///
/// Same as [`format_code_sample`], plus [`RenderError::Io`] if the write fails.
pub fn render_code_sample(
    hex: &str,
    caps: &dyn TerminalCapabilities,
    writer: &mut impl Write,
) -> Result<MappedColor, RenderError> {
    let (mapped, it) = format_code_sample(hex, caps)?;
    writer.write_all(it.as_bytes())?;
    writer.flush()?;
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CapabilityError, ColorSpace, ColorSupport, NoColor, SgrCapabilities};

    #[test]
    fn test_probe_eight_colors() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi8);
        let expected = (0..8)
            .map(|it| format!("\x1b[3{it}m{it:>4}"))
            .collect::<String>()
            + "\x1b[0m\n";
        assert_eq!(format_palette_probe(&caps).unwrap(), expected);
    }

    #[test]
    fn test_probe_full_palette() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        let it = format_palette_probe(&caps).unwrap();
        assert!(it.starts_with("\x1b[38;5;0m   0\x1b[38;5;1m   1"));
        assert!(it.ends_with("\x1b[38;5;255m 255\x1b[0m\n"));
        assert_eq!(it.matches("\x1b[38;5;").count(), 256);
        assert_eq!(it.matches('\n').count(), 1);
    }

    #[test]
    fn test_probe_without_colors() {
        let mut buffer: Vec<u8> = vec![];
        let result = probe_palette(&NoColor, &mut buffer);
        assert!(matches!(
            result,
            Err(RenderError::Capability(CapabilityError::NoColors))
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_code_sample() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        let mut buffer: Vec<u8> = vec![];
        let mapped = render_code_sample("#ff8000", &caps, &mut buffer).unwrap();
        assert_eq!(mapped.ansi, AnsiValue::new(214));
        assert_eq!(mapped.color_space, ColorSpace::RgbCube);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\x1b[38;5;214m 214\x1b[0m \x1b[48;5;214m 214\x1b[0m\n"
        );
    }

    #[test]
    fn test_code_sample_primary() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        let (mapped, it) = format_code_sample("000", &caps).unwrap();
        assert_eq!(mapped.color_space, ColorSpace::Ansi16);
        assert_eq!(it, "\x1b[38;5;0m   0\x1b[0m \x1b[48;5;0m   0\x1b[0m\n");
    }

    #[test]
    fn test_code_sample_malformed() {
        let caps = SgrCapabilities::new(ColorSupport::Ansi256);
        let result = format_code_sample("zz0000", &caps);
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }
}
