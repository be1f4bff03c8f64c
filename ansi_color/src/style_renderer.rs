// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crate::{RenderError, StyleRequest, TerminalCapabilities, map_hex_color};

/// Produce the bytes for `text` styled by `request`. The order is always: foreground,
/// background, attributes (in [`crate::Attribute`] declaration order), the text, and
/// then the reset sequence unless [`StyleRequest::suppress_reset`] is set. No newline
/// is added.
///
/// Every color and capability is resolved before anything is assembled, so an error
/// never leaves a half written style behind.
///
/// # Errors
///
/// - [`RenderError::Parse`] when a hex color is malformed.
/// - [`RenderError::Capability`] when the terminal can't produce a sequence.
pub fn format_styled_text(
    request: &StyleRequest,
    text: &str,
    caps: &dyn TerminalCapabilities,
) -> Result<String, RenderError> {
    let mut acc = String::new();

    if let Some(hex) = &request.foreground {
        acc.push_str(&caps.set_foreground(map_hex_color(hex)?)?);
    }

    if let Some(hex) = &request.background {
        acc.push_str(&caps.set_background(map_hex_color(hex)?)?);
    }

    for attribute in request.attributes.iter() {
        acc.push_str(&caps.attribute(attribute)?);
    }

    acc.push_str(text);

    if !request.suppress_reset {
        acc.push_str(&caps.reset()?);
    }

    tracing::debug!(message = "Styled text", request = ?request, output = ?acc);
    Ok(acc)
}

/// [`format_styled_text`] written to `writer`. Nothing is written if formatting fails.
///
/// # Errors
///
/// Same as [`format_styled_text`], plus [`RenderError::Io`] if the write fails.
pub fn render_styled_text(
    request: &StyleRequest,
    text: &str,
    caps: &dyn TerminalCapabilities,
    writer: &mut impl Write,
) -> Result<(), RenderError> {
    let it = format_styled_text(request, text, caps)?;
    writer.write_all(it.as_bytes())?;
    writer.flush()?;
    Ok(())
}
